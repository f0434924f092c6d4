use crate::prelude::*;

use crate::api::Product;
use crate::utils::{ellipsize, price_to_string, CCStr};

/// Longest description shown on a card before truncation kicks in.
const DESCRIPTION_MAX_CHARS: usize = 100;

/// One product card: image, category badge, title, shortened description
/// and formatted price.
#[derive(Debug, Clone, PartialEq)]
pub struct UIProductCard {
    pub id: u32,
    pub title: CCStr,
    pub category: CCStr,
    pub description: CCStr,
    /// Already formatted with two decimals, without the currency marker.
    pub price: CCStr,
    pub image: CCStr,
}
impl FromRef<Product> for UIProductCard {
    fn from_ref(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            description: ellipsize(&product.description, DESCRIPTION_MAX_CHARS),
            price: CCStr::from(price_to_string(product.price)),
            image: product.image.clone(),
        }
    }
}
impl LoadedElement for UIProductCard {
    type Loader = SkeletonLoader;
    fn element<M: LoadedComponentInputMapper>(self, _m: M) -> Element {
        let alt = self.title.clone();
        rsx! {
            div { class: "card card-lg border shadow-xl w-xs",
                figure { class: "aspect-square bg-white p-6",
                    img {
                        class: "object-contain",
                        src: "{self.image}",
                        alt: "{alt}",
                    }
                }
                div { class: "card-body",
                    div { class: "badge badge-secondary badge-sm uppercase", {self.category} }
                    h3 { class: "card-title text-base", {self.title} }
                    p { class: "text-sm text-base-content/70", {self.description} }
                    div { class: "card-actions justify-between items-center mt-2",
                        div { class: "text-lg font-bold", "${self.price}" }
                    }
                }
            }
        }
    }

    fn place_holder() -> Self {
        Self {
            id: 0,
            title: CCStr::from("Product title placeholder"),
            category: CCStr::from("category"),
            description: CCStr::from(
                "A couple of lines of placeholder text roughly the size of a real product \
                 description, so the skeleton keeps the card shape.",
            ),
            price: CCStr::from("99.99"),
            image: CCStr::default(),
        }
    }
}

/// The card grid for a whole product list, in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct UIProductGrid {
    pub cards: Vec<UIProductCard>,
}
impl FromRef<[Product]> for UIProductGrid {
    fn from_ref(products: &[Product]) -> Self {
        Self {
            cards: products.iter().map(Product::ref_into).collect(),
        }
    }
}
impl LoadedSuccessConversionMarker for TypeCouple<[Product], UIProductGrid> {}

impl LoadedElement for UIProductGrid {
    type Loader = ProductGridLoader;
    fn element<M: LoadedComponentInputMapper>(self, m: M) -> Element {
        rsx! {
            div { class: "container mx-auto grid grid-cols-[repeat(auto-fill,var(--container-xs))] gap-6 justify-center",
                for card in self.cards {
                    LoadedComponent::<UIProductCard> { key: "{card.id}", input: m.map(card.clone()) }
                }
            }
        }
    }

    fn place_holder() -> Self {
        Self {
            cards: (0..8)
                .map(|id| UIProductCard {
                    id,
                    ..UIProductCard::place_holder()
                })
                .collect(),
        }
    }
}

/// Grid-level loader: placeholder cards while loading, a generic alert
/// instead of the grid on error.
pub struct ProductGridLoader;
impl Loader for ProductGridLoader {
    #[inline(always)]
    fn load(children: Element) -> Element {
        children
    }
    #[inline(always)]
    fn error(_children: Element) -> Element {
        rsx! {
            div { class: "container mx-auto max-w-xl mt-8",
                div { class: "alert alert-error justify-center", role: "alert",
                    "Failed to load products. Please try again later."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utils::CheapClone;

    fn product(id: u32, title: &str, description: &str, price: f64) -> Product {
        Product {
            id,
            title: CCStr::from(title),
            price,
            description: CCStr::from(description),
            category: CCStr::from("electronics"),
            image: CCStr::from(format!("https://example.com/img/{id}.jpg")),
        }
    }

    #[test]
    fn grid_has_one_card_per_product_in_input_order() {
        let products = vec![
            product(3, "Monitor", "27 inch panel", 159.99),
            product(1, "Keyboard", "Tenkeyless", 49.0),
            product(2, "Mouse", "Wireless", 25.5),
        ];
        let grid = UIProductGrid::from_ref(products.as_slice());

        assert_eq!(grid.cards.len(), 3);
        assert_eq!(
            grid.cards.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
        assert_eq!(&*grid.cards[0].title, "Monitor");
    }

    #[test]
    fn long_description_is_truncated_on_the_card() {
        let long = "x".repeat(140);
        let card: UIProductCard = product(1, "Cable", &long, 9.0).ref_into();
        assert_eq!(card.description.chars().count(), 103);
        assert!(card.description.ends_with("..."));

        let short = "fits in one line";
        let card: UIProductCard = product(2, "Cable", short, 9.0).ref_into();
        assert_eq!(&*card.description, short);
    }

    #[test]
    fn price_is_formatted_with_two_decimals() {
        let card: UIProductCard = product(1, "Charger", "USB-C", 9.0).ref_into();
        assert_eq!(&*card.price, "9.00");
        let card: UIProductCard = product(2, "Charger", "USB-C", 9.5).ref_into();
        assert_eq!(&*card.price, "9.50");
    }

    #[test]
    fn converting_a_new_list_replaces_all_cards() {
        let first = vec![product(1, "Keyboard", "Tenkeyless", 49.0)];
        let second = vec![
            product(2, "Mouse", "Wireless", 25.5),
            product(3, "Monitor", "27 inch panel", 159.99),
        ];
        let grid = UIProductGrid::from_ref(first.as_slice());
        assert_eq!(grid.cards.len(), 1);

        let grid = UIProductGrid::from_ref(second.as_slice());
        assert_eq!(grid.cards.len(), 2);
        assert!(grid.cards.iter().all(|c| c.id != 1));
    }

    #[test]
    fn empty_list_yields_an_empty_grid() {
        let grid = UIProductGrid::from_ref([].as_slice());
        assert!(grid.cards.is_empty());
    }

    #[test]
    fn pending_fetch_maps_to_the_loading_state() {
        let pending: LResult<CheapClone<[Product]>> = None;
        let input: LoadedComponentInput<UIProductGrid> = pending.ref_into();
        assert!(matches!(input, LoadedComponentInput::Loading));
    }

    #[test]
    fn failed_fetch_maps_to_the_error_state() {
        let failed: LResult<CheapClone<[Product]>> = Some(Err(CCStr::from("request failed")));
        let input: LoadedComponentInput<UIProductGrid> = failed.ref_into();
        match input {
            LoadedComponentInput::LoadedError(e) => assert_eq!(e, "request failed"),
            other => panic!("expected the error state, got {other:?}"),
        }
    }

    #[test]
    fn successful_fetch_maps_to_the_cards() {
        let products: CheapClone<[Product]> = CheapClone::from(vec![
            product(1, "Keyboard", "Tenkeyless", 49.0),
            product(2, "Mouse", "Wireless", 25.5),
        ]);
        let loaded: LResult<CheapClone<[Product]>> = Some(Ok(products));
        let input: LoadedComponentInput<UIProductGrid> = loaded.ref_into();
        match input {
            LoadedComponentInput::LoadedSuccess(grid) => assert_eq!(grid.cards.len(), 2),
            other => panic!("expected the success state, got {other:?}"),
        }
    }
}
