use crate::model::{
    Category, LocalizedText, OptionGroup, PriceList, PriceMode, Product, ProductAdmin,
    ProductOption, ProductOptions,
};
use std::collections::BTreeMap;

/// Helper function to create a priced option
fn option(value: &str, id: &str, en: &str, price: f64, mode: Option<PriceMode>) -> ProductOption {
    ProductOption {
        value: value.to_string(),
        label: LocalizedText::new(id, en),
        image: None,
        preview: None,
        price: Some(price),
        price_mode: mode,
        active: None,
    }
}

/// Helper function for options whose price replaces the running total
fn variant(value: &str, id: &str, en: &str, price: f64) -> ProductOption {
    option(value, id, en, price, Some(PriceMode::Override))
}

/// Helper function for add-on options
fn addon(value: &str, id: &str, en: &str, price: f64) -> ProductOption {
    option(value, id, en, price, None)
}

fn group(id: &str, default_value: &str, options: Vec<ProductOption>) -> OptionGroup {
    OptionGroup {
        id: id.to_string(),
        default_value: Some(default_value.to_string()),
        options,
    }
}

fn product(
    id: &str,
    category: Category,
    name: &str,
    price: f64,
    variations: Vec<OptionGroup>,
    admin: ProductAdmin,
) -> Product {
    Product {
        id: id.to_string(),
        category,
        name: name.to_string(),
        price,
        description: None,
        images: vec![format!("/images/products/{}.jpg", id)],
        options: ProductOptions { variations },
        admin,
    }
}

fn shipped_admin() -> ProductAdmin {
    ProductAdmin {
        shipping_origins: vec!["Jakarta".to_string()],
        shipping_destinations: vec!["Indonesia".to_string()],
        ..ProductAdmin::default()
    }
}

/// The built-in storefront catalog.
pub fn default_products() -> Vec<Product> {
    vec![
        product(
            "frame-3d",
            Category::ThreeDFrame,
            "Bingkai 3D",
            150000.0,
            vec![group(
                "size",
                "15x15cm",
                vec![
                    variant("15x15cm", "15 x 15 cm", "15 x 15 cm", 150000.0),
                    variant("20x20cm", "20 x 20 cm", "20 x 20 cm", 200000.0),
                    variant("30x30cm", "30 x 30 cm", "30 x 30 cm", 300000.0),
                ],
            )],
            shipped_admin(),
        ),
        product(
            "frame-2d",
            Category::TwoDFrame,
            "Bingkai 2D",
            100000.0,
            vec![
                group(
                    "size",
                    "8R",
                    vec![
                        variant("8R", "8R (20 x 25 cm)", "8R (20 x 25 cm)", 100000.0),
                        variant("10R", "10R (25 x 30 cm)", "10R (25 x 30 cm)", 135000.0),
                        variant("12R", "12R (30 x 40 cm)", "12R (30 x 40 cm)", 175000.0),
                        variant("16R", "16R (40 x 50 cm)", "16R (40 x 50 cm)", 250000.0),
                    ],
                ),
                group(
                    "frame_color",
                    "black",
                    vec![
                        addon("black", "Hitam", "Black", 0.0),
                        addon("white", "Putih", "White", 0.0),
                        addon("wood", "Kayu", "Wood", 15000.0),
                    ],
                ),
                group(
                    "front",
                    "glass",
                    vec![
                        addon("glass", "Kaca", "Glass", 0.0),
                        addon("acrylic", "Akrilik", "Acrylic", 25000.0),
                    ],
                ),
            ],
            shipped_admin(),
        ),
        product(
            "acrylic-stand",
            Category::AcrylicStand,
            "Stand Akrilik",
            85000.0,
            vec![
                group(
                    "stand_type",
                    "a5",
                    vec![
                        variant("a5", "A5", "A5", 85000.0),
                        variant("a4", "A4", "A4", 125000.0),
                        variant("custom-shape", "Bentuk Custom", "Custom Shape", 150000.0),
                    ],
                ),
                group(
                    "base_color",
                    "clear",
                    vec![
                        addon("clear", "Bening", "Clear", 0.0),
                        addon("black", "Hitam", "Black", 10000.0),
                    ],
                ),
            ],
            ProductAdmin {
                frames: crate::model::FrameAvailability {
                    glass: false,
                    acrylic: true,
                },
                ..shipped_admin()
            },
        ),
        product(
            "additional-service",
            Category::Additional,
            "Layanan Tambahan",
            0.0,
            vec![group(
                "service",
                "ekspress",
                vec![
                    variant("ekspress", "Ekspress 1 Hari", "1-Day Express", 50000.0),
                    variant("tambah-wajah-1-5", "Tambah Wajah 1-5", "Extra Faces 1-5", 25000.0),
                    variant("tambah-wajah-6-10", "Tambah Wajah 6-10", "Extra Faces 6-10", 50000.0),
                ],
            )],
            ProductAdmin {
                show_in_gallery: false,
                ..ProductAdmin::default()
            },
        ),
        product(
            "softcopy-design",
            Category::SoftcopyDesign,
            "Softcopy Design",
            75000.0,
            Vec::new(),
            ProductAdmin::default(),
        ),
    ]
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(label, price)| (label.to_string(), *price))
        .collect()
}

/// The built-in flat price list.
pub fn default_price_list() -> PriceList {
    let mut prices = PriceList::new();
    prices.insert(
        "3D Frame".to_string(),
        table(&[("15x15cm", 150000.0), ("20x20cm", 200000.0), ("30x30cm", 300000.0)]),
    );
    prices.insert(
        "2D Frame".to_string(),
        table(&[
            ("8R", 100000.0),
            ("10R", 135000.0),
            ("12R", 175000.0),
            ("16R", 250000.0),
        ]),
    );
    prices.insert(
        "Acrylic Stand".to_string(),
        table(&[("A5", 85000.0), ("A4", 125000.0)]),
    );
    prices.insert(
        "Additional".to_string(),
        table(&[
            ("Ekspress 1 Hari", 50000.0),
            ("Tambah Wajah 1-5", 25000.0),
            ("Tambah Wajah 6-10", 50000.0),
        ]),
    );
    prices.insert(
        "Softcopy Design".to_string(),
        table(&[("Softcopy Design", 75000.0)]),
    );
    prices
}
