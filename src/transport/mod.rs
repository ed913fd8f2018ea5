//! Transport layer: request descriptors and wire-format details.

mod guest;
mod number;
mod orders;
mod request;
mod user;
mod vendor;

pub use guest::{encode_countries, encode_notifications, encode_prices, encode_products};
pub use orders::{
    SmsCheckStatus, decode_sms_check_status, encode_ban, encode_buy_activation,
    encode_buy_hosting, encode_cancel, encode_check_sms, encode_finish, encode_reuse,
    encode_sms_inbox, is_sms_check,
};
pub use request::{ApiRequest, HttpMethod};
pub use user::{
    decode_balance, encode_delete_max_price, encode_max_prices, encode_order_history,
    encode_payments, encode_profile, encode_set_max_price,
};
pub use vendor::{
    encode_vendor_orders, encode_vendor_payments, encode_vendor_statistics,
    encode_vendor_wallets, encode_vendor_withdraw,
};
