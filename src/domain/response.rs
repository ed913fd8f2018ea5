/// Balance projection of `user/profile`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub balance: f64,
    pub rating: f64,
    pub frozen_balance: f64,
}
