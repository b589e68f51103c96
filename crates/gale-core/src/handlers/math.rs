//! Integer multiplication endpoint

use crate::{QueryParams, Response};

/// Multiply the `num1` and `num2` query parameters.
///
/// `raw` is the target with the route token already stripped. The product
/// wraps at 32 bits.
pub fn multiply(raw: &str) -> Response {
    let params = match QueryParams::parse(raw) {
        Ok(params) => params,
        Err(_) => {
            return Response::bad_request(
                "Error: Invalid query format. Please provide valid parameters for multiplication.\n\
                 Example query: /multiply?num1=<num1>&num2=<num2>",
            )
        }
    };

    let (Some(num1), Some(num2)) = (params.get("num1"), params.get("num2")) else {
        return Response::bad_request("Error: Both num1 and num2 parameters are required.");
    };

    let (Ok(num1), Ok(num2)) = (num1.parse::<i32>(), num2.parse::<i32>()) else {
        return Response::bad_request(
            "Error: Invalid input. Please provide valid integers for num1 and num2.",
        );
    };

    Response::html(format!("Result is: {}", num1.wrapping_mul(num2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatusCode;

    #[test]
    fn test_multiply() {
        let res = multiply("num1=3&num2=4");
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body_string().unwrap().contains("Result is: 12"));
    }

    #[test]
    fn test_negative_operands() {
        let res = multiply("num1=-5&num2=6");
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body_string().unwrap().contains("Result is: -30"));
    }

    #[test]
    fn test_invalid_integer() {
        let res = multiply("num1=abc&num2=4");
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(res.body_string().unwrap().contains("valid integers"));
    }

    #[test]
    fn test_missing_parameter() {
        let res = multiply("num1=3");
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(res
            .body_string()
            .unwrap()
            .contains("Both num1 and num2 parameters are required"));
    }

    #[test]
    fn test_malformed_query() {
        let res = multiply("num1");
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(res.body_string().unwrap().contains("Invalid query format"));
    }

    #[test]
    fn test_product_wraps() {
        let res = multiply("num1=2147483647&num2=2");
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body_string().unwrap().contains("Result is: -2"));
    }
}
