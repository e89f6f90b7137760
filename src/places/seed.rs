//! Bundled default catalog, used when no stored catalog is available.

use super::{Place, PlaceCatalog, PriceLevel};

#[allow(clippy::too_many_arguments)]
fn seed_place(
    id: &str,
    name: &str,
    category: &str,
    address: &str,
    hours: &str,
    rating: f32,
    price_level: PriceLevel,
    distance: &str,
    latitude: f64,
    longitude: f64,
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        address: address.to_string(),
        hours: hours.to_string(),
        rating,
        price_level,
        distance: distance.to_string(),
        image: String::new(),
        latitude,
        longitude,
        user_comment: None,
        is_visited: false,
        is_favorite: false,
    }
}

/// Default catalog of places around the reference location.
pub fn default_catalog() -> PlaceCatalog {
    use PriceLevel::*;

    PlaceCatalog::new(vec![
        seed_place("1", "Александровский сад", "Парк", "ул. Ленина, 1", "Круглосуточно", 4.8, Budget, "1.2 км", 58.6091, 49.6876),
        seed_place("2", "Кофейня «Зерно»", "Кафе", "ул. Московская, 12", "08:00–22:00", 4.6, Budget, "350 м", 58.6042, 49.6643),
        seed_place("3", "Вятский художественный музей", "Музей", "ул. Карла Маркса, 70", "10:00–18:00", 4.9, Medium, "650 м", 58.6001, 49.6719),
        seed_place("4", "Ресторан «Хлыновъ»", "Ресторан", "ул. Спасская, 20", "12:00–00:00", 4.7, Premium, "900 м", 58.6068, 49.6781),
        seed_place("5", "Парк имени Кирова", "Парк", "Октябрьский пр-т, 92", "Круглосуточно", 4.5, Budget, "2.4 км", 58.5912, 49.6512),
        seed_place("6", "ТЦ «Глобус»", "Торговый центр", "ул. Воровского, 77", "10:00–22:00", 4.2, Medium, "3.1 км", 58.5867, 49.6398),
        seed_place("7", "Драматический театр", "Театр", "Театральная пл., 1", "11:00–20:00", 4.8, Medium, "500 м", 58.6027, 49.6741),
        seed_place("8", "Кафе «Вишнёвый сад»", "Кафе", "ул. Горького, 5", "09:00–23:00", 4.4, Medium, "700 м", 58.6079, 49.6634),
        seed_place("9", "Бар «Подвал»", "Бар", "ул. Ленина, 84", "18:00–04:00", 4.3, Medium, "800 м", 58.5988, 49.6652),
        seed_place("10", "Набережная Грина", "Парк", "Набережная Грина", "Круглосуточно", 4.9, Budget, "1.5 км", 58.6112, 49.6899),
        seed_place("11", "Ресторан «Шале»", "Ресторан", "ул. Дерендяева, 21", "12:00–02:00", 4.6, Premium, "1.8 км", 58.5943, 49.6815),
        seed_place("12", "ТРЦ «Jam Молл»", "Торговый центр", "ул. Карла Маркса, 21", "10:00–22:00", 4.1, Medium, "1.1 км", 58.6098, 49.6702),
        seed_place("13", "Музей К. Э. Циолковского", "Музей", "ул. Преображенская, 33", "10:00–18:00", 4.7, Budget, "400 м", 58.6050, 49.6707),
        seed_place("14", "Кондитерская «Сладкий дом»", "Кафе", "ул. Володарского, 108", "08:00–21:00", 4.5, Budget, "600 м", 58.6012, 49.6620),
        seed_place("15", "Дымковская слобода", "Музей", "ул. Свободы, 2", "10:00–18:00", 4.6, Budget, "4.2 км", 58.6221, 49.7172),
        seed_place("16", "Филармония", "Концертный зал", "ул. Спасская, 17", "12:00–20:00", 4.7, Medium, "950 м", 58.6061, 49.6770),
    ])
}
