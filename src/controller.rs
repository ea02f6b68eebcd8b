//! # CRUD Controller
//!
//! The presentation layer. Turns simple commands ("create a product named X", "delete user 3")
//! into calls on the read and write services, and writes a human-readable line about each
//! outcome to its output sink. All text formatting lives here.
//!
//! Ids arrive as plain numbers, the way a command line or form would supply them, and are
//! wrapped into the typed ids before they reach a service.

use crate::framework::{Creatable, Deletable, Readable, Updatable};
use crate::model::{Product, ProductId, User, UserId};
use crate::products::{ProductReadService, ProductWriteService};
use crate::users::{UserReadService, UserWriteService};
use rust_decimal::Decimal;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{instrument, warn};

/// Errors that can occur while running a controller command.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The output sink rejected a write.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ControllerError>;

/// Controller over the product and user services.
#[derive(Debug)]
pub struct CrudController<W: Write> {
    product_reader: ProductReadService,
    product_writer: ProductWriteService,
    user_reader: UserReadService,
    user_writer: UserWriteService,
    out: W,
}

impl<W: Write> CrudController<W> {
    pub fn new(
        product_reader: ProductReadService,
        product_writer: ProductWriteService,
        user_reader: UserReadService,
        user_writer: UserWriteService,
        out: W,
    ) -> Self {
        Self {
            product_reader,
            product_writer,
            user_reader,
            user_writer,
            out,
        }
    }

    /// Gives the output sink back, e.g. to inspect what was written.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Direct access to the output sink for text that isn't tied to a command.
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    // =========================================================================
    // Products
    // =========================================================================

    #[instrument(skip(self))]
    pub fn create_product(
        &mut self,
        name: &str,
        description: &str,
        price: Decimal,
        stock: u32,
    ) -> Result<Option<ProductId>> {
        let mut product = Product::new(name, description, price, stock);
        if self.product_writer.create(&mut product) {
            writeln!(self.out, "✓ Product created: {}", describe_product(&product))?;
            Ok(Some(product.id))
        } else {
            warn!("Product was not created");
            writeln!(self.out, "✗ Error creating product")?;
            Ok(None)
        }
    }

    #[instrument(skip(self))]
    pub fn read_product(&mut self, id: u32) -> Result<Option<Product>> {
        let product = self.product_reader.get_by_id(ProductId(id));
        match &product {
            Some(p) => writeln!(self.out, "✓ Product found: {}", describe_product(p))?,
            None => writeln!(self.out, "✗ Product with ID {id} not found")?,
        }
        Ok(product)
    }

    #[instrument(skip(self))]
    pub fn read_all_products(&mut self) -> Result<Vec<Product>> {
        let products = self.product_reader.get_all();
        writeln!(self.out, "Products ({}):", products.len())?;
        for p in &products {
            writeln!(self.out, "  - {}", describe_product(p))?;
        }
        Ok(products)
    }

    /// Replaces product `id` wholesale with the given fields.
    #[instrument(skip(self))]
    pub fn update_product(
        &mut self,
        id: u32,
        name: &str,
        description: &str,
        price: Decimal,
        stock: u32,
    ) -> Result<bool> {
        let product = Product::with_id(ProductId(id), name, description, price, stock);
        let updated = self.product_writer.update(product);
        if updated {
            writeln!(self.out, "✓ Product {id} updated")?;
        } else {
            writeln!(self.out, "✗ Product with ID {id} not found, nothing updated")?;
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: u32) -> Result<bool> {
        let deleted = self.product_writer.delete(ProductId(id));
        if deleted {
            writeln!(self.out, "✓ Product {id} deleted")?;
        } else {
            writeln!(self.out, "✗ Product with ID {id} not found, nothing deleted")?;
        }
        Ok(deleted)
    }

    pub fn product_exists(&self, id: u32) -> bool {
        self.product_reader.exists(ProductId(id))
    }

    // =========================================================================
    // Users
    // =========================================================================

    #[instrument(skip(self, password))]
    pub fn create_user(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
        active: bool,
    ) -> Result<Option<UserId>> {
        let mut user = User::new(username, email, password, role, active);
        if self.user_writer.create(&mut user) {
            writeln!(self.out, "✓ User created: {}", describe_user(&user))?;
            Ok(Some(user.id))
        } else {
            warn!("User was not created");
            writeln!(self.out, "✗ Error creating user")?;
            Ok(None)
        }
    }

    #[instrument(skip(self))]
    pub fn read_user(&mut self, id: u32) -> Result<Option<User>> {
        let user = self.user_reader.get_by_id(UserId(id));
        match &user {
            Some(u) => writeln!(self.out, "✓ User found: {}", describe_user(u))?,
            None => writeln!(self.out, "✗ User with ID {id} not found")?,
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    pub fn read_all_users(&mut self) -> Result<Vec<User>> {
        let users = self.user_reader.get_all();
        writeln!(self.out, "Users ({}):", users.len())?;
        for u in &users {
            writeln!(self.out, "  - {}", describe_user(u))?;
        }
        Ok(users)
    }

    /// Replaces user `id` wholesale with the given fields.
    #[instrument(skip(self, password))]
    pub fn update_user(
        &mut self,
        id: u32,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
        active: bool,
    ) -> Result<bool> {
        let user = User::with_id(UserId(id), username, email, password, role, active);
        let updated = self.user_writer.update(user);
        if updated {
            writeln!(self.out, "✓ User {id} updated")?;
        } else {
            writeln!(self.out, "✗ User with ID {id} not found, nothing updated")?;
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete_user(&mut self, id: u32) -> Result<bool> {
        let deleted = self.user_writer.delete(UserId(id));
        if deleted {
            writeln!(self.out, "✓ User {id} deleted")?;
        } else {
            writeln!(self.out, "✗ User with ID {id} not found, nothing deleted")?;
        }
        Ok(deleted)
    }

    pub fn user_exists(&self, id: u32) -> bool {
        self.user_reader.exists(UserId(id))
    }
}

fn describe_product(p: &Product) -> String {
    format!(
        "Product{{id={}, name='{}', description='{}', price={:.2}, stock={}}}",
        p.id.0, p.name, p.description, p.price, p.stock
    )
}

// Password omitted.
fn describe_user(u: &User) -> String {
    format!(
        "User{{id={}, username='{}', email='{}', role='{}', active={}}}",
        u.id.0, u.username, u.email, u.role, u.active
    )
}
