use crate::controller::CrudController;
use crate::products::{self, ProductReadService, ProductReportService, ProductWriteService};
use crate::users::{self, UserReadService, UserReportService, UserWriteService};
use std::io::Write;
use tracing::info;

/// Wires repositories and services together for one in-process run.
///
/// `CrudSystem` is responsible for:
/// - **Ownership**: one repository per entity type, shared through `Rc`
/// - **Capability wiring**: each service receives only the handles it is typed for
///
/// # Architecture
///
/// ```text
/// CrudController ─┬─ ProductReadService  ── Rc<dyn Readable<Product>>  ─┐
///                 ├─ ProductWriteService ── Rc<dyn Creatable/...>      ─┴─ ProductRepository
///                 ├─ UserReadService     ── Rc<dyn Readable<User>>     ─┐
///                 └─ UserWriteService    ── Rc<dyn Creatable/...>      ─┴─ UserRepository
/// ProductReportService ── Rc<dyn Readable<Product>>
/// UserReportService    ── Rc<dyn Readable<User>>
/// ```
///
/// The two repositories are independent: nothing cascades between them.
///
/// # Example
///
/// ```
/// use isp_crud::lifecycle::CrudSystem;
/// use rust_decimal::Decimal;
///
/// let system = CrudSystem::new();
/// let mut controller = system.controller(Vec::new());
/// controller.create_product("Mouse", "Wireless", Decimal::new(2550, 2), 50).unwrap();
///
/// assert_eq!(system.product_reports.low_stock().len(), 0);
/// ```
#[derive(Debug)]
pub struct CrudSystem {
    /// Read-only access to products
    pub product_reader: ProductReadService,

    /// Create/update/delete access to products
    pub product_writer: ProductWriteService,

    /// Read-only access to users
    pub user_reader: UserReadService,

    /// Create/update/delete access to users
    pub user_writer: UserWriteService,

    /// Inventory reports
    pub product_reports: ProductReportService,

    /// User directory reports
    pub user_reports: UserReportService,
}

impl CrudSystem {
    /// Creates both repositories and every service over them.
    pub fn new() -> Self {
        let product_repository = products::new();
        let user_repository = users::new();

        let system = Self {
            product_reader: ProductReadService::new(product_repository.clone()),
            product_writer: ProductWriteService::over(&product_repository),
            product_reports: ProductReportService::new(product_repository.clone()),
            user_reader: UserReadService::new(user_repository.clone()),
            user_writer: UserWriteService::over(&user_repository),
            user_reports: UserReportService::new(user_repository.clone()),
        };
        info!("CRUD system ready");
        system
    }

    /// Builds a controller over this system's services that writes to `out`.
    pub fn controller<W: Write>(&self, out: W) -> CrudController<W> {
        CrudController::new(
            self.product_reader.clone(),
            self.product_writer.clone(),
            self.user_reader.clone(),
            self.user_writer.clone(),
            out,
        )
    }
}

impl Default for CrudSystem {
    fn default() -> Self {
        Self::new()
    }
}
