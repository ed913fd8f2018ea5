//! Domain layer: strong types with validation and invariants (no I/O).

pub mod country;
mod request;
mod response;
mod validation;
mod value;

pub use country::{country_name, iso_country};
pub use request::{
    ActivationOptions, BuyActivation, BuyHosting, Category, Language, NumberSelector,
    PriceFilter, VendorWithdraw,
};
pub use response::Balance;
pub use validation::ValidationError;
pub use value::{ANY, ApiToken, OrderId, PhoneNumber, ProductName};
