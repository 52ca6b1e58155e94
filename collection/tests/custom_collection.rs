use collection_utils::{every, includes, keys, map_values, reduce, Collection, Insert};

/// A fixed record with named fields, enumerated in declaration order.
#[derive(Debug, PartialEq)]
struct Rgb<T> {
    red: T,
    green: T,
    blue: T,
}

const FIELDS: [&str; 3] = ["red", "green", "blue"];

/// Builder for an [Rgb], filled one field at a time.
#[derive(Debug)]
struct PartialRgb<U> {
    red: Option<U>,
    green: Option<U>,
    blue: Option<U>,
}

impl<U> PartialRgb<U> {
    fn finish(self) -> Option<Rgb<U>> {
        Some(Rgb {
            red: self.red?,
            green: self.green?,
            blue: self.blue?,
        })
    }
}

impl<U> Insert<U> for PartialRgb<U> {
    fn put(&mut self, key: &str, value: U) {
        match key {
            "red" => self.red = Some(value),
            "green" => self.green = Some(value),
            "blue" => self.blue = Some(value),
            _ => {}
        }
    }
}

impl<T> Collection for Rgb<T> {
    type Item = T;
    type Like<U> = PartialRgb<U>;

    fn keys(&self) -> Vec<String> {
        FIELDS.iter().map(|field| field.to_string()).collect()
    }

    fn get(&self, key: &str) -> Option<&T> {
        match key {
            "red" => Some(&self.red),
            "green" => Some(&self.green),
            "blue" => Some(&self.blue),
            _ => None,
        }
    }

    fn new_empty_like<U>(&self) -> PartialRgb<U> {
        PartialRgb {
            red: None,
            green: None,
            blue: None,
        }
    }
}

fn coral() -> Rgb<u8> {
    Rgb {
        red: 255,
        green: 127,
        blue: 80,
    }
}

#[test]
fn keys_follow_declaration_order() {
    assert_eq!(keys(&coral()), FIELDS);
}

#[test]
fn map_values_builds_same_kind() {
    let scaled = map_values(&coral(), |value, _| f32::from(*value) / 255.0)
        .finish()
        .unwrap();
    assert_eq!(scaled.red, 1.0);
    assert_eq!(scaled.blue, 80.0 / 255.0);

    let named = map_values(&coral(), |_, key| key.to_uppercase())
        .finish()
        .unwrap();
    assert_eq!(named.green, "GREEN");
}

#[test]
fn folds_and_predicates() {
    let brightest = reduce(&coral(), |a, b, _, _| a.max(*b), None);
    assert_eq!(brightest, Ok(255));
    assert!(includes(&coral(), &127));
    assert!(!includes(&coral(), &128));
    assert!(every(&coral(), |value, _, _| *value >= 80));
}
