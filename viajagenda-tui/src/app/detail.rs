use crate::locale::format_date_br;
use crate::types::Activity;

const REQUIRED_EMPTY: &str = "(campo obrigatório vazio)";
const NO_LOCATION: &str = "Não foi selecionado local.";

/// One labeled line of the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
    /// The value is a placeholder for a missing field.
    pub missing: bool,
}

impl DetailLine {
    fn present(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            missing: false,
        }
    }

    fn missing(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            missing: true,
        }
    }

    /// Missing optional fields read "Não foi selecionado(a) <Label>.".
    fn optional(label: &'static str, value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => Self::present(label, v),
            None => Self::missing(label, format!("Não foi selecionado(a) {label}.")),
        }
    }

    fn required(label: &'static str, value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => Self::present(label, v),
            None => Self::missing(label, REQUIRED_EMPTY.to_string()),
        }
    }
}

/// Every field except id and image, in display order. The title is the
/// modal heading and is not repeated here.
pub fn detail_lines(activity: &Activity) -> Vec<DetailLine> {
    let location = match activity
        .location_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        Some(url) => DetailLine::present("Local", format!("Abrir no Maps: {url}")),
        None => DetailLine::missing("Local", NO_LOCATION.to_string()),
    };

    vec![
        DetailLine::required("Descrição", Some(activity.description.clone())),
        location,
        DetailLine::required("Data", activity.date.as_deref().map(format_date_br)),
        DetailLine::optional("Hora de Início", activity.start_time.clone()),
        DetailLine::optional("Hora de Fim", activity.end_time.clone()),
        DetailLine::optional("Custo Estimado (R$)", activity.estimated_cost.map(format_cost)),
        DetailLine::required("Categoria", activity.category.map(|c| c.to_string())),
        DetailLine::required("Prioridade", activity.priority.map(|p| p.to_string())),
        DetailLine::required("Status", Some(activity.status.to_string())),
    ]
}

/// The location link opened by the modal, if any.
pub fn maps_url(activity: &Activity) -> Option<&str> {
    activity
        .location_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

fn format_cost(cost: f64) -> String {
    format!("{cost:.2}").replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Status};

    fn activity() -> Activity {
        Activity {
            id: 1,
            title: "Cristo Redentor".to_string(),
            image: None,
            description: "Subir de trem".to_string(),
            location_url: Some("https://maps.app.goo.gl/abc".to_string()),
            date: Some("2024-03-05".to_string()),
            start_time: Some("09:00:00".to_string()),
            end_time: None,
            estimated_cost: Some(45.5),
            category: Some(Category::Passeio),
            priority: Some(4),
            status: Status::Pendente,
        }
    }

    fn value<'a>(lines: &'a [DetailLine], label: &str) -> &'a str {
        &lines
            .iter()
            .find(|line| line.label == label)
            .unwrap_or_else(|| panic!("missing line {label}"))
            .value
    }

    #[test]
    fn formats_present_fields() {
        let lines = detail_lines(&activity());
        assert_eq!(lines.len(), 9);
        assert_eq!(value(&lines, "Local"), "Abrir no Maps: https://maps.app.goo.gl/abc");
        assert_eq!(value(&lines, "Data"), "05/03/2024");
        assert_eq!(value(&lines, "Custo Estimado (R$)"), "45,50");
        assert_eq!(value(&lines, "Categoria"), "PASSEIO");
        assert_eq!(value(&lines, "Status"), "PENDENTE");
        assert!(lines.iter().all(|line| line.label != "Título"));
    }

    #[test]
    fn placeholders_for_missing_fields() {
        let mut a = activity();
        a.location_url = Some("  ".to_string());
        a.date = None;
        a.estimated_cost = None;
        a.category = None;

        let lines = detail_lines(&a);
        assert_eq!(value(&lines, "Local"), NO_LOCATION);
        assert_eq!(value(&lines, "Data"), REQUIRED_EMPTY);
        assert_eq!(value(&lines, "Hora de Fim"), "Não foi selecionado(a) Hora de Fim.");
        assert_eq!(
            value(&lines, "Custo Estimado (R$)"),
            "Não foi selecionado(a) Custo Estimado (R$)."
        );
        assert_eq!(value(&lines, "Categoria"), REQUIRED_EMPTY);
        assert!(maps_url(&a).is_none());
    }

    #[test]
    fn unparseable_date_is_shown_raw() {
        let mut a = activity();
        a.date = Some("05/03/2024".to_string());
        assert_eq!(value(&detail_lines(&a), "Data"), "05/03/2024");
    }
}
