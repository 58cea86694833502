use rust_decimal::Decimal;

use crate::domain::product::ProductCategory::{Books, Clothing, Electronics, Home, Sports};
use crate::domain::product::{Product, ProductCategory};

struct SeedRow {
    id: u32,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    category: ProductCategory,
    in_stock: bool,
}

const SEED_ROWS: &[SeedRow] = &[
    // electronics
    SeedRow {
        id: 1,
        name: "Wireless Bluetooth Mouse",
        description: "Ergonomic wireless mouse with 2.4GHz USB receiver and long-lasting battery life",
        price_cents: 2999,
        category: Electronics,
        in_stock: true,
    },
    SeedRow {
        id: 2,
        name: "Mechanical Gaming Keyboard",
        description: "RGB backlit mechanical keyboard with blue switches and programmable macros",
        price_cents: 8999,
        category: Electronics,
        in_stock: true,
    },
    SeedRow {
        id: 3,
        name: "USB-C Hub 7-in-1",
        description: "Multi-port USB-C hub with HDMI, SD card reader, and 100W power delivery",
        price_cents: 4599,
        category: Electronics,
        in_stock: true,
    },
    SeedRow {
        id: 4,
        name: "Wireless Earbuds Pro",
        description: "Active noise cancelling wireless earbuds with 30-hour battery life and charging case",
        price_cents: 14999,
        category: Electronics,
        in_stock: false,
    },
    SeedRow {
        id: 5,
        name: "4K Webcam",
        description: "Ultra HD 4K webcam with autofocus, ring light, and dual microphones",
        price_cents: 11999,
        category: Electronics,
        in_stock: true,
    },
    SeedRow {
        id: 6,
        name: "Portable SSD 1TB",
        description: "Ultra-fast portable solid state drive with USB 3.2 Gen 2 speeds up to 1050MB/s",
        price_cents: 12999,
        category: Electronics,
        in_stock: true,
    },
    SeedRow {
        id: 7,
        name: "Smart LED Light Bulb",
        description: "WiFi-enabled color-changing LED bulb compatible with Alexa and Google Home",
        price_cents: 1999,
        category: Electronics,
        in_stock: true,
    },
    SeedRow {
        id: 8,
        name: "Wireless Charger Stand",
        description: "15W fast wireless charging stand with adjustable viewing angle for smartphones",
        price_cents: 3499,
        category: Electronics,
        in_stock: true,
    },
    // clothing
    SeedRow {
        id: 9,
        name: "Classic Cotton T-Shirt",
        description: "100% organic cotton crew neck t-shirt available in multiple colors",
        price_cents: 2499,
        category: Clothing,
        in_stock: true,
    },
    SeedRow {
        id: 10,
        name: "Slim Fit Denim Jeans",
        description: "Stretch denim jeans with modern slim fit and classic 5-pocket styling",
        price_cents: 5999,
        category: Clothing,
        in_stock: true,
    },
    SeedRow {
        id: 11,
        name: "Hooded Zip Sweatshirt",
        description: "Comfortable fleece-lined hoodie with full zip and kangaroo pockets",
        price_cents: 4499,
        category: Clothing,
        in_stock: true,
    },
    SeedRow {
        id: 12,
        name: "Running Jacket Windbreaker",
        description: "Lightweight water-resistant windbreaker with reflective details for running",
        price_cents: 6999,
        category: Clothing,
        in_stock: false,
    },
    SeedRow {
        id: 13,
        name: "Merino Wool Beanie",
        description: "Soft merino wool winter beanie hat with fold-over cuff design",
        price_cents: 2999,
        category: Clothing,
        in_stock: true,
    },
    SeedRow {
        id: 14,
        name: "Canvas Sneakers",
        description: "Classic low-top canvas sneakers with rubber sole and cushioned insole",
        price_cents: 5499,
        category: Clothing,
        in_stock: true,
    },
    SeedRow {
        id: 15,
        name: "Leather Crossbody Bag",
        description: "Genuine leather crossbody bag with adjustable strap and multiple compartments",
        price_cents: 8999,
        category: Clothing,
        in_stock: true,
    },
    // home
    SeedRow {
        id: 16,
        name: "Stainless Steel French Press",
        description: "34oz double-wall insulated French press coffee maker with heat-resistant handle",
        price_cents: 3999,
        category: Home,
        in_stock: true,
    },
    SeedRow {
        id: 17,
        name: "Ceramic Non-Stick Frying Pan",
        description: "10-inch ceramic-coated frying pan with ergonomic handle and even heat distribution",
        price_cents: 4999,
        category: Home,
        in_stock: true,
    },
    SeedRow {
        id: 18,
        name: "Memory Foam Pillow Set",
        description: "Set of 2 bamboo-covered memory foam pillows with adjustable fill for custom comfort",
        price_cents: 7999,
        category: Home,
        in_stock: true,
    },
    SeedRow {
        id: 19,
        name: "Smart Robot Vacuum",
        description: "App-controlled robot vacuum with auto-recharge and scheduled cleaning features",
        price_cents: 29999,
        category: Home,
        in_stock: false,
    },
    SeedRow {
        id: 20,
        name: "Bamboo Cutting Board Set",
        description: "Set of 3 bamboo cutting boards with juice grooves and non-slip feet",
        price_cents: 3499,
        category: Home,
        in_stock: true,
    },
    SeedRow {
        id: 21,
        name: "Aromatherapy Essential Oil Diffuser",
        description: "Ultrasonic essential oil diffuser with 7 LED light colors and auto shut-off",
        price_cents: 2999,
        category: Home,
        in_stock: true,
    },
    SeedRow {
        id: 22,
        name: "Weighted Blanket 15lbs",
        description: "Premium weighted blanket with glass beads and soft breathable cotton cover",
        price_cents: 8999,
        category: Home,
        in_stock: true,
    },
    // sports
    SeedRow {
        id: 23,
        name: "Yoga Mat with Carrying Strap",
        description: "6mm thick non-slip yoga mat with alignment marks and free carrying strap",
        price_cents: 3999,
        category: Sports,
        in_stock: true,
    },
    SeedRow {
        id: 24,
        name: "Adjustable Dumbbell Set",
        description: "Pair of adjustable dumbbells from 5-52.5 lbs with quick-change dial system",
        price_cents: 49999,
        category: Sports,
        in_stock: true,
    },
    SeedRow {
        id: 25,
        name: "Resistance Bands Set",
        description: "Set of 5 resistance bands with handles, door anchor, and carrying bag",
        price_cents: 2499,
        category: Sports,
        in_stock: true,
    },
    SeedRow {
        id: 26,
        name: "Foam Roller for Muscle Recovery",
        description: "High-density foam roller for deep tissue massage and muscle recovery",
        price_cents: 2999,
        category: Sports,
        in_stock: true,
    },
    SeedRow {
        id: 27,
        name: "Sports Water Bottle 32oz",
        description: "Insulated stainless steel water bottle keeps drinks cold for 24 hours",
        price_cents: 3499,
        category: Sports,
        in_stock: false,
    },
    // books
    SeedRow {
        id: 28,
        name: "The Pragmatic Programmer",
        description: "Classic software development book with timeless programming wisdom and best practices",
        price_cents: 4499,
        category: Books,
        in_stock: true,
    },
    SeedRow {
        id: 29,
        name: "Atomic Habits",
        description: "Science-backed strategies for building good habits and breaking bad ones",
        price_cents: 1699,
        category: Books,
        in_stock: true,
    },
    SeedRow {
        id: 30,
        name: "The Design of Everyday Things",
        description: "Foundational book on user-centered design and human-computer interaction",
        price_cents: 2499,
        category: Books,
        in_stock: true,
    },
];

/// The canonical 30-record catalog, IDs 1..=30 in display order.
pub fn seed_products() -> Vec<Product> {
    SEED_ROWS
        .iter()
        .map(|row| {
            Product::new(
                row.id,
                row.name,
                row.description,
                Decimal::new(row.price_cents, 2),
                row.category,
                row.in_stock,
            )
        })
        .collect()
}
