//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use serde_json::{Map as JsonMap, Value as JsonValue};
use toml::map::Map;
use toml::Value::{self, Array, Boolean, Datetime, Float, Integer, String, Table};

/// Convert Mapbox GL Styles from [TOML format](https://pka.github.io/mapbox-gl-style-spec/) to JSON
pub fn toml_style_to_gljson(toml: &toml::Value) -> JsonValue {
    convert_value(toml)
}

fn convert_value(toml: &toml::Value) -> JsonValue {
    match *toml {
        Table(ref table) => convert_table(table),
        Array(ref array) => JsonValue::Array(array.iter().map(convert_value).collect()),
        String(ref value) => JsonValue::from(value.as_str()),
        Integer(value) => JsonValue::from(value),
        Float(value) => JsonValue::from(value),
        Boolean(value) => JsonValue::from(value),
        Datetime(ref value) => JsonValue::from(value.to_string()),
    }
}

fn convert_table(table: &Map<std::string::String, Value>) -> JsonValue {
    let mut json = JsonMap::new();
    for (key, value) in table.iter() {
        if key == "stops" {
            // [{ in = 0, out = "blue" }] -> [[0, "blue"]]
            let mut stops = Vec::new();
            if let Array(ref stops_arr) = *value {
                for stop in stops_arr.iter() {
                    if let Table(ref stops_tbl) = *stop {
                        if let Some(input) = stops_tbl.get("in") {
                            let mut pair = vec![convert_value(input)];
                            if let Some(output) = stops_tbl.get("out") {
                                pair.push(convert_value(output));
                            }
                            stops.push(JsonValue::Array(pair));
                        }
                    }
                }
            }
            json.insert(key.to_string(), JsonValue::Array(stops));
        } else {
            json.insert(key.to_string(), convert_value(value));
        }
    }
    JsonValue::Object(json)
}
