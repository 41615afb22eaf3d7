// ============================================================================
// CAFE - Café con nombre, origen y precio
// ============================================================================

use serde::{Deserialize, Serialize};

/// Café recibido del endpoint de listado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub origin: String,
    pub price: f64,
}

impl Cafe {
    /// Línea de texto para el listado: "<nombre> (<origen>) - $<precio>"
    pub fn display_line(&self) -> String {
        format!("{} ({}) - ${}", self.name, self.origin, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_integer_price() {
        // Precio entero se muestra sin decimales, igual que en el navegador
        let cafe = Cafe {
            id: None,
            name: "Colombia".to_string(),
            origin: "Huila".to_string(),
            price: 12.0,
        };
        assert_eq!(cafe.display_line(), "Colombia (Huila) - $12");
    }

    #[test]
    fn test_display_line_decimal_price() {
        let cafe = Cafe {
            id: Some(3),
            name: "Etiopía".to_string(),
            origin: "Yirgacheffe".to_string(),
            price: 14.5,
        };
        assert_eq!(cafe.display_line(), "Etiopía (Yirgacheffe) - $14.5");
    }

    #[test]
    fn test_deserialize_cafe_list() {
        let json = r#"[{"name":"Colombia","origin":"Huila","price":12}]"#;
        let cafes: Vec<Cafe> = serde_json::from_str(json).unwrap();
        assert_eq!(cafes.len(), 1);
        assert_eq!(cafes[0].name, "Colombia");
        assert_eq!(cafes[0].origin, "Huila");
        assert_eq!(cafes[0].price, 12.0);
        assert_eq!(cafes[0].id, None);
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let json = r#"[
            {"id":2,"name":"Brasil","origin":"Cerrado","price":9.5},
            {"id":1,"name":"Colombia","origin":"Huila","price":12}
        ]"#;
        let cafes: Vec<Cafe> = serde_json::from_str(json).unwrap();
        assert_eq!(cafes[0].name, "Brasil");
        assert_eq!(cafes[1].name, "Colombia");
    }
}
