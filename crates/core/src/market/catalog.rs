//! Product catalog.

use crate::models::{CartItem, Product};
use crate::types::{Category, ProductId, UserId};

use super::MarketError;

/// Category selector for the shop page; `All` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a `?category=` value. Unknown values fall back to `All`.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|p| p.parse::<Category>().ok())
            .map_or(Self::All, Self::Only)
    }

    /// Query-string value, `"all"` for no filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// All listings, newest first.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from existing listings, keeping their order.
    #[must_use]
    pub const fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Every listing.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a listing.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a listing for mutation.
    pub fn get_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| &p.id == id)
    }

    /// Insert a listing at the front.
    pub fn add(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Remove a listing, returning it.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Listings by one seller.
    pub fn by_seller<'a>(&'a self, seller: &'a UserId) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| &p.seller_id == seller)
    }

    /// Listings in `filter` whose title or description contains `term`.
    #[must_use]
    pub fn search(&self, filter: CategoryFilter, term: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.admits(p.category) && p.matches_term(term))
            .collect()
    }

    /// First `limit` listings.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().take(limit).collect()
    }

    /// Check that every line can be fulfilled, then decrement stock.
    ///
    /// Nothing is decremented unless every line fits.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ProductNotFound`] if a listing was removed
    /// after it was carted, or [`MarketError::OutOfStock`] if a line asks for
    /// more than is left.
    pub fn reserve(&mut self, items: &[CartItem]) -> Result<(), MarketError> {
        for item in items {
            let product = self
                .get(&item.product.id)
                .ok_or_else(|| MarketError::ProductNotFound(item.product.id.clone()))?;
            if product.stock < item.quantity {
                return Err(MarketError::OutOfStock {
                    title: product.title.clone(),
                    available: product.stock,
                });
            }
        }
        for item in items {
            if let Some(product) = self.get_mut(&item.product.id) {
                product.stock -= item.quantity;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn product(id: &str, category: Category, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            seller_id: UserId::new(if id == "3" { "a2" } else { "a1" }),
            title: title.to_string(),
            description: "handmade".to_string(),
            price: Price::rupees(100),
            category,
            images: vec!["img".to_string()],
            stock: 2,
            reviews: Vec::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            product("1", Category::Paintings, "Warli Wedding"),
            product("2", Category::Statues, "Dhokra Elephant"),
            product("3", Category::Paintings, "Madhubani Fish"),
        ])
    }

    #[test]
    fn test_add_prepends_and_grows_by_one() {
        let mut catalog = catalog();
        let before = catalog.len();
        catalog.add(product("9", Category::Fruits, "Mahua"));
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.all().first().map(|p| p.id.as_str()), Some("9"));
    }

    #[test]
    fn test_search_combines_category_and_term() {
        let catalog = catalog();
        let paintings = catalog.search(CategoryFilter::Only(Category::Paintings), "");
        assert_eq!(paintings.len(), 2);

        let fish = catalog.search(CategoryFilter::Only(Category::Paintings), "FISH");
        assert_eq!(fish.len(), 1);

        let none = catalog.search(CategoryFilter::Only(Category::Statues), "fish");
        assert!(none.is_empty());

        let all = catalog.search(CategoryFilter::All, "handmade");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_filter_param_parsing() {
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("all")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("statues")),
            CategoryFilter::Only(Category::Statues)
        );
    }

    #[test]
    fn test_by_seller() {
        let catalog = catalog();
        let seller = UserId::new("a1");
        assert_eq!(catalog.by_seller(&seller).count(), 2);
    }

    #[test]
    fn test_remove() {
        let mut catalog = catalog();
        assert!(catalog.remove(&ProductId::new("2")).is_some());
        assert!(catalog.remove(&ProductId::new("2")).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_reserve_is_all_or_nothing() {
        let mut catalog = catalog();
        let ok = CartItem {
            product: product("1", Category::Paintings, "Warli Wedding"),
            quantity: 1,
        };
        let too_many = CartItem {
            product: product("2", Category::Statues, "Dhokra Elephant"),
            quantity: 5,
        };

        let err = catalog.reserve(&[ok.clone(), too_many]);
        assert!(matches!(err, Err(MarketError::OutOfStock { available: 2, .. })));
        assert_eq!(catalog.get(&ProductId::new("1")).map(|p| p.stock), Some(2));

        assert!(catalog.reserve(&[ok]).is_ok());
        assert_eq!(catalog.get(&ProductId::new("1")).map(|p| p.stock), Some(1));
    }
}
