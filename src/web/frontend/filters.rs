use crate::contact::whatsapp_link;
use crate::directory::catalog::icon_for;
use std::collections::HashMap;
use tera::Value;

/// Font Awesome icon of a sector, e.g. `{{ sector | sector_icon }}`.
pub fn sector_icon(sector: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let sector: String = tera::from_value(sector.clone())?;
    Ok(Value::String(icon_for(&sector).to_owned()))
}

pub fn whatsapp(number: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let number: String = tera::from_value(number.clone())?;
    Ok(Value::String(whatsapp_link(&number)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        sector = {"Energía", "Transformación Digital", "Pesca"},
        expected = {"fa-bolt", "fa-laptop-code", "fa-circle"}
    )]
    fn should_get_sector_icon(sector: &str, expected: &str) {
        let result = sector_icon(&Value::from(sector), &HashMap::new()).unwrap();

        assert_eq!(Value::from(expected), result);
    }

    #[test]
    fn should_fail_when_sector_is_not_a_string() {
        let result = sector_icon(&Value::from(3), &HashMap::new());

        assert!(result.is_err());
    }

    #[test]
    fn should_build_whatsapp_link() {
        let result = whatsapp(&Value::from("+52 (55) 1234-5678"), &HashMap::new()).unwrap();

        assert_eq!(Value::from("https://wa.me/525512345678"), result);
    }
}
