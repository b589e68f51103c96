//! Temperature conversion endpoint

use crate::{QueryParams, Response};

/// Temperature units accepted by the `temperature` route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    /// Parse a unit letter, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "C" => Some(Unit::Celsius),
            "F" => Some(Unit::Fahrenheit),
            "K" => Some(Unit::Kelvin),
            _ => None,
        }
    }

    /// The unit letter used in response bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
            Unit::Kelvin => "K",
        }
    }
}

/// Apply the standard pairwise conversion between two units
pub fn apply(value: f64, from: Unit, to: Unit) -> f64 {
    use Unit::{Celsius, Fahrenheit, Kelvin};
    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value + 459.67) * 5.0 / 9.0,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => value * 9.0 / 5.0 - 459.67,
        _ => value,
    }
}

/// Convert the `value` parameter from the `from` unit to the `to` unit
pub fn convert(raw: &str) -> Response {
    let params = match QueryParams::parse(raw) {
        Ok(params) => params,
        Err(_) => {
            return Response::bad_request(
                "Error: Invalid query format. Please use the following format for temperature \
                 conversion: /temperature?value=<value>&from=<unit>&to=<unit>",
            )
        }
    };

    let (Some(value), Some(from), Some(to)) =
        (params.get("value"), params.get("from"), params.get("to"))
    else {
        return Response::bad_request(
            "Error: All parameters (value, from, to) are required for temperature conversion.",
        );
    };

    let Ok(value) = value.parse::<f64>() else {
        return Response::bad_request(
            "Error: Invalid input value. Please provide a valid number for temperature.",
        );
    };

    let (Some(from), Some(to)) = (Unit::parse(from), Unit::parse(to)) else {
        return Response::bad_request(
            "Error: Invalid units. Please use 'C', 'F', or 'K' for temperature units.",
        );
    };

    let result = apply(value, from, to);
    Response::html(format!("Result is: {} {}", result, to.as_str()))
}
