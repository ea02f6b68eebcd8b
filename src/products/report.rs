//! # Product Reports
//!
//! Read-only inventory reporting. [`ProductReportService`] is built from an
//! `Rc<dyn Readable<Product>>`: it can list, filter and rank products but cannot change them.
//!
//! Reports are returned as values that implement [`Display`](fmt::Display), so the caller decides
//! where the text goes.

use crate::framework::Readable;
use crate::model::{Product, ProductId};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Products with stock strictly below this are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 20;

const RULE: &str = "═══════════════════════════════════════════════════";

fn write_banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{RULE}")?;
    writeln!(f, "{title:^51}")?;
    writeln!(f, "{RULE}")?;
    writeln!(f)
}

/// Reporting service over the product catalogue.
pub struct ProductReportService {
    reader: Rc<dyn Readable<Product>>,
    low_stock_threshold: u32,
}

impl ProductReportService {
    /// Creates the service with [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn new(reader: Rc<dyn Readable<Product>>) -> Self {
        Self::with_threshold(reader, DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn with_threshold(reader: Rc<dyn Readable<Product>>, low_stock_threshold: u32) -> Self {
        Self {
            reader,
            low_stock_threshold,
        }
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    /// Products whose stock is below the threshold, in creation order.
    #[instrument(skip(self))]
    pub fn low_stock(&self) -> Vec<Product> {
        let threshold = self.low_stock_threshold;
        let products: Vec<Product> = self
            .reader
            .get_all()
            .into_iter()
            .filter(|p| p.stock < threshold)
            .collect();
        debug!(threshold, count = products.len(), "Low stock");
        products
    }

    /// All products, most expensive first. Equal prices keep creation order.
    #[instrument(skip(self))]
    pub fn by_price_desc(&self) -> Vec<Product> {
        let mut products = self.reader.get_all();
        products.sort_by(|a, b| b.price.cmp(&a.price));
        products
    }

    /// Every product with id, name, price and stock.
    pub fn full_report(&self) -> InventoryReport {
        InventoryReport {
            products: self.reader.get_all(),
        }
    }

    /// Products that need restocking.
    pub fn low_stock_report(&self) -> LowStockReport {
        LowStockReport {
            products: self.low_stock(),
        }
    }

    /// Product names ranked by price.
    pub fn price_report(&self) -> PriceReport {
        PriceReport {
            products: self.by_price_desc(),
        }
    }
}

impl fmt::Debug for ProductReportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductReportService")
            .field("low_stock_threshold", &self.low_stock_threshold)
            .finish_non_exhaustive()
    }
}

impl Readable<Product> for ProductReportService {
    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.reader.get_by_id(id)
    }

    fn get_all(&self) -> Vec<Product> {
        self.reader.get_all()
    }

    fn exists(&self, id: ProductId) -> bool {
        self.reader.exists(id)
    }
}

/// Full inventory listing.
#[derive(Debug, Clone)]
pub struct InventoryReport {
    pub products: Vec<Product>,
}

impl fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, "FULL INVENTORY REPORT")?;
        for p in &self.products {
            writeln!(
                f,
                "ID: {} | Name: {:<15} | Price: ${:.2} | Stock: {}",
                p.id.0, p.name, p.price, p.stock
            )?;
        }
        Ok(())
    }
}

/// Listing of products under the low-stock threshold.
#[derive(Debug, Clone)]
pub struct LowStockReport {
    pub products: Vec<Product>,
}

impl fmt::Display for LowStockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, "LOW STOCK PRODUCTS REPORT")?;
        if self.products.is_empty() {
            return writeln!(f, "✓ No products with low stock");
        }
        for p in &self.products {
            writeln!(f, "⚠ {} - Stock: {} units", p.name, p.stock)?;
        }
        Ok(())
    }
}

/// Products ranked by descending price.
#[derive(Debug, Clone)]
pub struct PriceReport {
    pub products: Vec<Product>,
}

impl fmt::Display for PriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, "PRODUCTS BY PRICE REPORT")?;
        for p in &self.products {
            writeln!(f, "{:<15}: ${:.2}", p.name, p.price)?;
        }
        Ok(())
    }
}
