//! Demo artisans and listings the marketplace starts with.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Product, Review, User};
use crate::types::{
    Category, CurrencyCode, MobileNumber, Price, ProductId, ReviewId, UserId, UserRole,
};

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?q=80&w={width}&auto=format&fit=crop")
}

fn artisan(
    id: &str,
    name: &str,
    shop_name: &str,
    location: &str,
    art_type: &str,
    contact: &str,
    photo: &str,
) -> User {
    let mut user = User::new(UserId::new(id), name, UserRole::Producer);
    user.shop_name = Some(shop_name.to_string());
    user.location = Some(location.to_string());
    user.art_type = Some(art_type.to_string());
    user.contact = MobileNumber::parse(contact).ok();
    user.avatar = Some(unsplash(photo, 200));
    user
}

/// The three founding artisans, `a1` to `a3`.
#[must_use]
pub fn artisans() -> Vec<User> {
    vec![
        artisan(
            "a1",
            "Ramesh Kumar",
            "Ramesh Tribal Arts",
            "Bastar, Chhattisgarh",
            "Dhokra Art",
            "9876543210",
            "photo-1507003211169-0a1dd7228f2d",
        ),
        artisan(
            "a2",
            "Sita Devi",
            "Mithila Colors",
            "Madhubani, Bihar",
            "Madhubani Painting",
            "9876543211",
            "photo-1494790108377-be9c29b29330",
        ),
        artisan(
            "a3",
            "Arjun Singh",
            "Bamboo Crafts",
            "Guwahati, Assam",
            "Bamboo Handicrafts",
            "9876543212",
            "photo-1500648767791-00dcc994a43e",
        ),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn review(id: &str, user: (&str, &str), rating: u8, comment: &str, on: NaiveDate) -> Review {
    Review {
        id: ReviewId::new(id),
        user_id: UserId::new(user.0),
        user_name: user.1.to_string(),
        rating,
        comment: comment.to_string(),
        date: on,
    }
}

struct Listing {
    id: &'static str,
    seller: &'static str,
    title: &'static str,
    description: &'static str,
    rupees: i64,
    category: Category,
    photos: &'static [&'static str],
    stock: u32,
}

impl Listing {
    fn into_product(self, reviews: Vec<Review>) -> Product {
        Product {
            id: ProductId::new(self.id),
            seller_id: UserId::new(self.seller),
            title: self.title.to_string(),
            description: self.description.to_string(),
            price: Price::new(Decimal::from(self.rupees), CurrencyCode::INR),
            category: self.category,
            images: self.photos.iter().map(|p| unsplash(p, 1000)).collect(),
            stock: self.stock,
            reviews,
        }
    }
}

/// The starting catalog, newest first.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Listing {
            id: "1",
            seller: "a2",
            title: "Madhubani Fish Painting",
            description: "Hand-painted on handmade paper with natural pigments. The pair of fish symbolises fertility and good fortune in Mithila tradition.",
            rupees: 2500,
            category: Category::Paintings,
            photos: &[
                "photo-1579783902614-a3fb3927b6a5",
                "photo-1578301978693-85fa9c0320b9",
            ],
            stock: 5,
        }
        .into_product(vec![
            review(
                "r1",
                ("c1", "Priya Sharma"),
                5,
                "The colours are even richer in person. Beautifully framed.",
                date(2024, 11, 2),
            ),
            review(
                "r2",
                ("c7", "Vikram Rao"),
                4,
                "Lovely detail, delivery took a few extra days.",
                date(2024, 10, 18),
            ),
        ]),
        Listing {
            id: "2",
            seller: "a1",
            title: "Dhokra Brass Elephant",
            description: "Lost-wax cast brass elephant made by Bastar metal smiths using a 4000 year old technique.",
            rupees: 3200,
            category: Category::Statues,
            photos: &["photo-1582738411706-bfc8e691d1c2"],
            stock: 3,
        }
        .into_product(vec![review(
            "r3",
            ("c4", "Ananya Iyer"),
            5,
            "Heavy, solid and full of character.",
            date(2024, 9, 21),
        )]),
        Listing {
            id: "3",
            seller: "a3",
            title: "Handwoven Bamboo Basket",
            description: "Sturdy storage basket woven from split bamboo by craftspeople in Assam.",
            rupees: 850,
            category: Category::Handicrafts,
            photos: &["photo-1595231776515-ddffb1f4eb73"],
            stock: 12,
        }
        .into_product(Vec::new()),
        Listing {
            id: "4",
            seller: "a2",
            title: "Warli Village Life Canvas",
            description: "White rice-paste figures on a red ochre ground showing a harvest dance.",
            rupees: 1800,
            category: Category::Paintings,
            photos: &["photo-1580136579312-94651dfd596d"],
            stock: 4,
        }
        .into_product(Vec::new()),
        Listing {
            id: "5",
            seller: "a1",
            title: "Raw Amethyst Cluster",
            description: "Naturally formed amethyst cluster collected from the hills of Chhattisgarh.",
            rupees: 1450,
            category: Category::Minerals,
            photos: &["photo-1518709594023-6eab9bab7b23"],
            stock: 6,
        }
        .into_product(Vec::new()),
        Listing {
            id: "6",
            seller: "a3",
            title: "Wild Forest Honey",
            description: "Raw honey gathered by forest communities of the north-east. 500g jar.",
            rupees: 450,
            category: Category::Fruits,
            photos: &["photo-1587049352846-4a222e784d38"],
            stock: 25,
        }
        .into_product(vec![review(
            "r4",
            ("c9", "Rohan Mehta"),
            4,
            "Thick and floral. Will order again.",
            date(2024, 12, 5),
        )]),
        Listing {
            id: "7",
            seller: "a3",
            title: "Assamese Gamosa Stole",
            description: "Handloom cotton stole with the traditional red border, woven on a pit loom.",
            rupees: 650,
            category: Category::Clothing,
            photos: &["photo-1583391733956-3750e0ff4e8b"],
            stock: 15,
        }
        .into_product(Vec::new()),
        Listing {
            id: "8",
            seller: "a1",
            title: "Tribal Dhol Drum",
            description: "Two-headed wooden drum with goatskin heads, played at Bastar festivals.",
            rupees: 4200,
            category: Category::Instruments,
            photos: &["photo-1519892300165-cb5542fb47c7"],
            stock: 2,
        }
        .into_product(Vec::new()),
        Listing {
            id: "9",
            seller: "a2",
            title: "Sikki Grass Festival Mask",
            description: "Ceremonial mask woven from golden sikki grass, used in Mithila festivals.",
            rupees: 1200,
            category: Category::Cultural,
            photos: &["photo-1604079628040-94301bb21b91"],
            stock: 7,
        }
        .into_product(Vec::new()),
    ]
}
