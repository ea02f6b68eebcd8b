//! # ISP CRUD
//!
//! > **Interface Segregation applied to a plain in-memory CRUD store.**
//!
//! Two entity types, [`Product`](model::Product) and [`User`](model::User), are stored in
//! in-memory repositories. Instead of one fat "repository" trait, the CRUD surface is split into
//! four capabilities, and every consumer depends only on the ones it actually calls.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why segregate?
//!
//! - **Read-only by construction**: a report built from `Rc<dyn Readable<Product>>` has no
//!   method that could change a product. That is checked by the compiler, not by review.
//! - **Small test doubles**: a service that only reads needs a mock that only answers reads.
//! - **Honest signatures**: a constructor lists exactly what a service is allowed to do.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `T`
//! You'll see `InMemoryRepository<T: Entity>` everywhere. The storage logic is written **once**
//! and works for Users and Products alike; `resource_types!` gives each instantiation its
//! familiar name (`ProductRepository`, `UserReadService`, ...).
//!
//! ### Snapshots
//! Reads return clones. Changing a returned value changes nothing in the repository until it is
//! passed back through `update`.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Plain Failure Values
//! Capability methods report failure the simple way: `false` from `create`/`update`/`delete`,
//! `None` from a lookup miss. The repository also offers a fallible API
//! (`try_update`, `try_delete`) returning [`RepositoryError`](framework::RepositoryError).
//!
//! ### 2. Concurrency Model
//! Single-threaded. Shared handles are `Rc`, state sits in `RefCell`, so nothing here is `Send`.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured logging. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`Entity`](framework::Entity), the four capability traits,
//!   [`InMemoryRepository`](framework::InMemoryRepository), [`mock`](framework::mock).
//!
//! ### 2. The Data ([`model`], [`products`], [`users`])
//! - Entities, their `Entity` impls, per-entity type names and reporting services.
//!
//! ### 3. The Services ([`services`])
//! - [`ReadService`](services::ReadService) and [`WriteService`](services::WriteService).
//!
//! ### 4. The Edges ([`controller`], [`lifecycle`])
//! - [`CrudController`](controller::CrudController) formats command outcomes;
//!   [`CrudSystem`](lifecycle::CrudSystem) wires everything together.
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod controller;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod products;
pub mod services;
pub mod users;

#[doc(hidden)]
pub use paste;
