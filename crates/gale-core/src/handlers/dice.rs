//! Dice rolling endpoint

use crate::{QueryParams, Response};
use rand::Rng;

/// Roll `numDice` independent dice with `sides` faces each.
///
/// Both parameters must be positive integers. Each roll is reported on its
/// own line, followed by the total sum.
pub fn roll<R: Rng>(raw: &str, rng: &mut R) -> Response {
    let params = match QueryParams::parse(raw) {
        Ok(params) => params,
        Err(_) => {
            return Response::bad_request(
                "Error: Invalid query format. Please use the following format for dice roll: \
                 /roll?sides=<sides>&numDice=<numDice>",
            )
        }
    };

    let (Some(sides), Some(num_dice)) = (params.get("sides"), params.get("numDice")) else {
        return Response::bad_request(
            "Error: Both sides and numDice parameters are required for dice roll.",
        );
    };

    let (Ok(sides), Ok(num_dice)) = (sides.parse::<i32>(), num_dice.parse::<i32>()) else {
        return Response::bad_request(
            "Error: Invalid input format. Please provide valid integers for sides and numDice.",
        );
    };

    if sides <= 0 || num_dice <= 0 {
        return Response::bad_request("Error: Sides and numDice must be positive integers.");
    }

    let mut sum: i64 = 0;
    let mut rolls = String::new();
    for i in 0..num_dice {
        let roll = rng.random_range(1..=sides);
        sum += i64::from(roll);
        rolls.push_str(&format!("Dice {}: {}\n", i + 1, roll));
    }

    Response::text(format!("Rolls:\n{}\nTotal Sum: {}", rolls, sum))
}
