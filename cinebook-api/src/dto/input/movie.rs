use serde::Deserialize;
use time::Date;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub length: i32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub certificate: String,
    #[serde(default, with = "crate::dto::iso_date::option")]
    pub release_date: Option<Date>,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::date;

    #[test]
    fn movie_json_deserialize_ok() {
        let json = r#"{
            "title": "Arrival",
            "photos": ["photo1.jpg"],
            "length": 116,
            "release_date": "2016-11-11"
        }"#;

        let movie = serde_json::from_str::<Movie>(json).unwrap();

        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.photos, vec!["photo1.jpg".to_string()]);
        assert_eq!(movie.release_date, Some(date!(2016 - 11 - 11)));
        assert_eq!(movie.director, "");
    }

    #[test]
    fn movie_json_deserialize_invalid_date() {
        let json = r#"{
            "title": "Arrival",
            "release_date": "11/11/2016"
        }"#;

        let movie = serde_json::from_str::<Movie>(json);

        assert!(movie.is_err());
    }
}
