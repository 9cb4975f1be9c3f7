//! JSON payloads shared by the unit tests

use serde_json::{Value, json};

pub fn lang_json(item_name: &str) -> Value {
    json!({
        "item_name": item_name,
        "description": format!("{item_name} description"),
        "wiki_link": format!("https://warframe.fandom.com/wiki/{item_name}"),
        "drop": [
            {"name": "Lith A1 Relic", "link": "https://warframe.fandom.com/wiki/Lith_A1"}
        ]
    })
}

/// One `items_in_set` entry, with a dashed `zh-hant` locale block
pub fn item_full_json(id: &str, url_name: &str, item_name: &str) -> Value {
    json!({
        "id": id,
        "url_name": url_name,
        "icon": format!("items/images/en/{url_name}.png"),
        "icon_format": "land",
        "thumb": format!("items/images/en/thumbs/{url_name}.128x128.png"),
        "sub_icon": null,
        "tags": ["prime", "warframe"],
        "ducats": 45,
        "quantity_for_set": 1,
        "set_root": false,
        "mastery_level": 0,
        "rarity": "rare",
        "trading_tax": 4000,
        "en": lang_json(item_name),
        "ru": lang_json(&format!("{item_name} ru")),
        "zh-hant": lang_json(&format!("{item_name} zh-hant")),
    })
}

/// An item object holding `id` and its set of two entries, `A1` and `A2`
pub fn item_set_json(requested_id: &str) -> Value {
    json!({
        "id": requested_id,
        "items_in_set": [
            item_full_json("A1", "ash_prime_set", "Ash Prime Set"),
            item_full_json("A2", "ash_prime_chassis", "Ash Prime Chassis"),
        ]
    })
}

pub fn item_envelope(requested_id: &str) -> Value {
    json!({ "payload": { "item": item_set_json(requested_id) } })
}

pub fn user_short_json(ingame_name: &str) -> Value {
    json!({
        "id": format!("user-{ingame_name}"),
        "ingame_name": ingame_name,
        "status": "ingame",
        "region": "en",
        "reputation": 42,
        "avatar": null,
        "last_seen": "2024-03-01T10:15:30.123+00:00"
    })
}

pub fn order_row_json(id: &str, order_type: &str, platinum: i64) -> Value {
    json!({
        "id": id,
        "platinum": platinum,
        "quantity": 1,
        "order_type": order_type,
        "platform": "pc",
        "region": "en",
        "creation_date": "2024-03-01T09:00:00.000+00:00",
        "last_update": "2024-03-01T10:00:00.000+00:00",
        "visible": true,
        "user": user_short_json(&format!("trader_{id}"))
    })
}

pub fn orders_envelope(count: usize) -> Value {
    let orders: Vec<Value> = (0..count)
        .map(|i| {
            let side = if i % 2 == 0 { "sell" } else { "buy" };
            order_row_json(&format!("o{i}"), side, 40 + i as i64)
        })
        .collect();
    json!({ "payload": { "orders": orders } })
}

pub fn order_item_json(id: &str, order_type: &str, platinum: i64) -> Value {
    json!({
        "id": id,
        "platinum": platinum,
        "quantity": 2,
        "order_type": order_type,
        "platform": "pc",
        "region": "en",
        "creation_date": "2024-03-01T09:00:00.000+00:00",
        "last_update": "2024-03-01T10:00:00.000+00:00",
        "visible": true,
        "mod_rank": 0,
        "item": {
            "id": "A1",
            "url_name": "ash_prime_set",
            "icon": "items/images/en/ash_prime_set.png",
            "thumb": "items/images/en/thumbs/ash_prime_set.128x128.png",
            "tags": ["prime", "set"],
            "ducats": 0,
            "quantity_for_set": 1,
            "en": { "item_name": "Ash Prime Set" }
        }
    })
}

pub fn user_orders_envelope() -> Value {
    json!({
        "payload": {
            "buy_orders": [order_item_json("b1", "buy", 80)],
            "sell_orders": [
                order_item_json("s1", "sell", 95),
                order_item_json("s2", "sell", 99)
            ]
        }
    })
}

pub fn statistic_closed_json(datetime: &str, moving_avg: Value) -> Value {
    json!({
        "datetime": datetime,
        "volume": 12,
        "min_price": 70,
        "max_price": 90,
        "open_price": 75,
        "closed_price": 85,
        "avg_price": 80.5,
        "wa_price": 81.25,
        "median": 80,
        "moving_avg": moving_avg,
        "donch_top": 95,
        "donch_bot": 65,
        "id": format!("closed-{datetime}")
    })
}

pub fn statistic_live_json(datetime: &str, order_type: &str) -> Value {
    json!({
        "datetime": datetime,
        "volume": 30,
        "min_price": 60,
        "max_price": 120,
        "avg_price": 85.0,
        "wa_price": 84.1,
        "median": 82.5,
        "moving_avg": 83.3,
        "order_type": order_type,
        "id": format!("live-{datetime}")
    })
}

/// Statistics with two closed 48 hours buckets and an empty closed 90 days bucket
pub fn statistic_envelope() -> Value {
    json!({
        "payload": {
            "statistics_closed": {
                "48hours": [
                    statistic_closed_json("2024-03-01T00:00:00.000+00:00", Value::Null),
                    statistic_closed_json("2024-03-01T01:00:00.000+00:00", json!(79.4))
                ],
                "90days": []
            },
            "statistics_live": {
                "48hours": [statistic_live_json("2024-03-01T00:00:00.000+00:00", "sell")],
                "90days": [
                    statistic_live_json("2024-02-01T00:00:00.000+00:00", "buy"),
                    statistic_live_json("2024-02-01T00:00:00.000+00:00", "sell")
                ]
            }
        }
    })
}

pub fn items_envelope() -> Value {
    json!({
        "payload": {
            "items": [
                {
                    "id": "A1",
                    "url_name": "ash_prime_set",
                    "item_name": "Ash Prime Set",
                    "thumb": "items/images/en/thumbs/ash_prime_set.128x128.png",
                    "vaulted": true
                },
                {
                    "id": "B7",
                    "url_name": "serration",
                    "item_name": "Serration",
                    "thumb": "items/images/en/thumbs/serration.128x128.png"
                }
            ]
        }
    })
}

pub fn session_envelope(ingame_name: Value) -> Value {
    json!({
        "payload": {
            "user": {
                "id": "me",
                "ingame_name": ingame_name,
                "platform": "pc",
                "locale": "en",
                "region": "en",
                "reputation": 7
            }
        }
    })
}
