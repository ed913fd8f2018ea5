//! One method per 5sim API operation.

use serde_json::Value;

use super::{FiveSimClient, FiveSimError};
use crate::domain::{
    Balance, BuyActivation, BuyHosting, Category, Language, NumberSelector, OrderId,
    PhoneNumber, PriceFilter, ProductName, VendorWithdraw,
};
use crate::transport;

impl FiveSimClient {
    /// Account profile (`user/profile`).
    pub async fn profile(&self) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_profile()).await
    }

    /// Balance, rating and frozen balance taken from the profile.
    pub async fn balance(&self) -> Result<Balance, FiveSimError> {
        let profile = self.execute(transport::encode_profile()).await?;
        transport::decode_balance(&profile).map_err(FiveSimError::MalformedResponse)
    }

    pub async fn order_history(&self, category: Category) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_order_history(category)).await
    }

    pub async fn payments(&self) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_payments()).await
    }

    pub async fn max_prices(&self) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_max_prices()).await
    }

    /// Set the automatic purchase ceiling for a product.
    pub async fn set_max_price(
        &self,
        product: &ProductName,
        price: f64,
    ) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_set_max_price(product, price))
            .await
    }

    pub async fn delete_max_price(&self, product: &ProductName) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_delete_max_price(product))
            .await
    }

    /// Product catalog for the selector's country and operator.
    pub async fn products(&self, selector: &NumberSelector) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_products(selector)).await
    }

    pub async fn prices(&self, filter: &PriceFilter) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_prices(filter)).await
    }

    /// Buy a number for a single activation.
    ///
    /// Returns [`FiveSimError::NoNumbersAvailable`] when the service has no stock.
    pub async fn buy_activation_number(
        &self,
        request: &BuyActivation,
    ) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_buy_activation(request))
            .await
    }

    pub async fn buy_hosting_number(&self, request: &BuyHosting) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_buy_hosting(request)).await
    }

    pub async fn reuse_number(
        &self,
        product: &ProductName,
        number: &PhoneNumber,
    ) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_reuse(product, number)).await
    }

    /// Fetch the order and its received messages.
    ///
    /// Succeeds only once the order is `RECEIVED` with at least one SMS.
    /// [`FiveSimError::NoSmsYet`] means "poll again later"; the `Order*`
    /// variants report a closed order.
    pub async fn check_sms(&self, id: &OrderId) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_check_sms(id)).await
    }

    pub async fn finish_order(&self, id: &OrderId) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_finish(id)).await
    }

    pub async fn cancel_order(&self, id: &OrderId) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_cancel(id)).await
    }

    pub async fn ban_order(&self, id: &OrderId) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_ban(id)).await
    }

    pub async fn sms_inbox(&self, id: &OrderId) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_sms_inbox(id)).await
    }

    pub async fn notifications(&self, lang: Language) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_notifications(lang)).await
    }

    pub async fn vendor_statistics(&self) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_vendor_statistics()).await
    }

    pub async fn vendor_wallets(&self) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_vendor_wallets()).await
    }

    pub async fn vendor_orders(&self, category: Category) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_vendor_orders(category)).await
    }

    pub async fn vendor_payments(&self) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_vendor_payments()).await
    }

    pub async fn create_vendor_withdraw(
        &self,
        request: &VendorWithdraw,
    ) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_vendor_withdraw(request))
            .await
    }

    pub async fn countries(&self) -> Result<Value, FiveSimError> {
        self.execute(transport::encode_countries()).await
    }
}
