use dioxus::prelude::*;

use crate::{
    api::{self, Product},
    utils::{log_error_ccstr, CCStr, CheapClone},
};

/// A loadable, faillible value: `None` while pending, then the result.
pub type LResult<T> = Option<Result<T, CCStr>>;
/// A faillible [`Resource`], the error already folded to a display string.
pub type FResource<T> = Resource<Result<T, CCStr>>;

/// Fetches the product list from the products endpoint, once, when the
/// calling component mounts.
///
/// Failures are logged and folded into a display string; the caller only
/// ever sees one generic error, whatever the cause.
pub fn use_resource_products() -> FResource<CheapClone<[Product]>> {
    let client = use_hook(reqwest::Client::new);
    use_resource(move || {
        let client = client.clone();
        async move {
            log::debug!("use_resource_products - start");
            let products = api::fetch_products(&client, api::PRODUCTS_ENDPOINT)
                .await
                .map(|products| {
                    log::debug!("use_resource_products - received {} products", products.len());
                    CheapClone::from(products)
                })
                .map_err(log_error_ccstr);
            log::debug!("use_resource_products - loaded");
            products
        }
    })
}

pub mod prelude {
    pub use super::{FResource, LResult};

    pub mod helper_hooks {
        pub use super::super::use_resource_products;
    }
}
