mod admin_requests_service;
mod mail_service;
mod movies_service;
mod showtimes_service;
mod theatres_service;
mod tickets_service;
mod uploads_service;
mod users_service;

pub use admin_requests_service::*;
pub use mail_service::*;
pub use movies_service::*;
pub use showtimes_service::*;
pub use theatres_service::*;
pub use tickets_service::*;
pub use uploads_service::*;
pub use users_service::*;

use crate::error::Error;
use bson::oid::ObjectId;
use time::{macros::format_description, Time};

///
/// Parses hex id received from user
///
/// ### Errors
/// - [Error::InvalidObjectId] when id is not 24 hex characters
///
pub fn parse_object_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::InvalidObjectId(id.to_string()))
}

///
/// Parses `HH:MM` start time of a showtime
///
/// ### Returns
/// daytime in canonical `HH:MM` form
///
fn parse_daytime(daytime: &str, field: &str) -> Result<String, Error> {
    let format = format_description!("[hour]:[minute]");
    let invalid = || Error::Validation(format!("{field} must have HH:MM format"));

    let time = Time::parse(daytime.trim(), format).map_err(|_| invalid())?;
    let daytime = time.format(format).map_err(|_| invalid())?;

    Ok(daytime)
}

fn validate_not_blank(value: &str, field: &str) -> Result<(), Error> {
    match value.trim().is_empty() {
        true => Err(Error::Validation(format!("{field} is required"))),
        false => Ok(()),
    }
}

fn validate_not_negative(value: i64, field: &str) -> Result<(), Error> {
    match value < 0 {
        true => Err(Error::Validation(format!("{field} must not be negative"))),
        false => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_object_id_invalid() {
        let result = parse_object_id("not-an-id");

        assert!(matches!(result, Err(Error::InvalidObjectId(id)) if id == "not-an-id"));
    }

    #[test]
    fn parse_object_id_ok() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn parse_daytime_canonical() {
        assert_eq!(parse_daytime(" 09:05 ", "daytime").unwrap(), "09:05");
        assert!(matches!(
            parse_daytime("25:00", "daytime"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn validate_not_blank_whitespace() {
        let result = validate_not_blank("  ", "title");

        assert!(matches!(result, Err(Error::Validation(msg)) if msg == "title is required"));
    }
}
