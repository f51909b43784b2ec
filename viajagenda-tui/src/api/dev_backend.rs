use std::sync::{Arc, Mutex};

use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::api::dto::{ActivityFilter, ActivityPayload};
use crate::locale::format_iso_date;
use crate::types::{Activity, ActivityId, Category, Status};

/// In-memory stand-in for viagens-api, used by `viajagenda dev`.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<DevStore>>,
}

#[derive(Debug)]
struct DevStore {
    next_id: ActivityId,
    activities: Vec<Activity>,
}

impl DevBackend {
    pub fn new() -> Self {
        let today = OffsetDateTime::now_utc()
            .to_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
            .date();
        Self::with_activities(seed_dev_activities(today))
    }

    pub fn with_activities(activities: Vec<Activity>) -> Self {
        let next_id = activities.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            store: Arc::new(Mutex::new(DevStore {
                next_id,
                activities,
            })),
        }
    }

    /// Mirrors the server's finders: no filter lists everything, a single
    /// filter narrows by it, and any combination of filters matches nothing.
    pub fn list(&self, filter: &ActivityFilter) -> Vec<Activity> {
        let store = self.store.lock().expect("dev store lock poisoned");
        let pairs = filter.query_pairs();
        let [(key, value)] = pairs.as_slice() else {
            return if pairs.is_empty() {
                store.activities.clone()
            } else {
                Vec::new()
            };
        };

        let title = value.to_lowercase();
        store
            .activities
            .iter()
            .filter(|a| match *key {
                "titulo" => a.title.to_lowercase().contains(&title),
                "categoria" => filter.category.is_some_and(|c| a.category == Some(c)),
                "status" => filter.status.is_some_and(|s| a.status == s),
                "prioridade" => filter
                    .priority
                    .is_some_and(|p| a.priority == Some(i64::from(p))),
                "data" => a.date.as_deref() == Some(value.as_str()),
                _ => false,
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, id: ActivityId) -> Option<Activity> {
        self.store
            .lock()
            .expect("dev store lock poisoned")
            .activities
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub fn create(&self, payload: &ActivityPayload) -> Activity {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let id = store.next_id;
        store.next_id += 1;

        let mut activity = activity_from_payload(id, payload);
        activity.status = Status::Pendente;
        store.activities.push(activity.clone());
        activity
    }

    pub fn update(&self, id: ActivityId, payload: &ActivityPayload) -> Option<Activity> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let existing = store.activities.iter_mut().find(|a| a.id == id)?;
        // PUT never touches the status; only the PATCH endpoints do.
        *existing = Activity {
            status: existing.status,
            ..activity_from_payload(id, payload)
        };
        Some(existing.clone())
    }

    pub fn delete(&self, id: ActivityId) -> bool {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let before = store.activities.len();
        store.activities.retain(|a| a.id != id);
        store.activities.len() != before
    }

    pub fn set_status(&self, id: ActivityId, status: Status) -> bool {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        match store.activities.iter_mut().find(|a| a.id == id) {
            Some(activity) => {
                activity.status = status;
                true
            }
            None => false,
        }
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn activity_from_payload(id: ActivityId, payload: &ActivityPayload) -> Activity {
    Activity {
        id,
        title: payload.title.clone(),
        image: payload.image.clone(),
        description: payload.description.clone(),
        location_url: payload.location_url.clone(),
        date: Some(payload.date.clone()),
        start_time: payload.start_time.clone(),
        end_time: payload.end_time.clone(),
        estimated_cost: payload.estimated_cost,
        category: Some(payload.category),
        priority: Some(i64::from(payload.priority)),
        status: payload.status.unwrap_or_default(),
    }
}

fn seed_dev_activities(today: Date) -> Vec<Activity> {
    let entry = |id: ActivityId,
                 days_ahead: i64,
                 title: &str,
                 description: &str,
                 category: Category,
                 priority: i64,
                 start: Option<&str>,
                 end: Option<&str>,
                 cost: Option<f64>,
                 location: Option<&str>| Activity {
        id,
        title: title.to_string(),
        image: None,
        description: description.to_string(),
        location_url: location.map(str::to_string),
        date: Some(format_iso_date(today + Duration::days(days_ahead))),
        start_time: start.map(str::to_string),
        end_time: end.map(str::to_string),
        estimated_cost: cost,
        category: Some(category),
        priority: Some(priority),
        status: Status::Pendente,
    };

    vec![
        entry(
            1,
            1,
            "Check-in no hotel",
            "Hotel em Copacabana, reserva confirmada",
            Category::Hospedagem,
            5,
            Some("14:00:00"),
            Some("15:00:00"),
            Some(850.0),
            Some("https://maps.google.com/?q=Copacabana"),
        ),
        entry(
            2,
            1,
            "Jantar na Lapa",
            "Restaurante com música ao vivo",
            Category::Alimentacao,
            3,
            Some("20:00:00"),
            Some("22:30:00"),
            Some(180.0),
            None,
        ),
        entry(
            3,
            2,
            "Cristo Redentor",
            "Subida de trem pelo Corcovado",
            Category::Passeio,
            4,
            Some("09:00:00"),
            Some("12:00:00"),
            Some(120.5),
            Some("https://maps.google.com/?q=Cristo+Redentor"),
        ),
        entry(
            4,
            2,
            "Pão de Açúcar",
            "Bondinho no fim da tarde",
            Category::Passeio,
            4,
            Some("16:30:00"),
            None,
            Some(195.0),
            None,
        ),
        entry(
            5,
            3,
            "Feira de artesanato",
            "Lembrancinhas para a família",
            Category::Compras,
            2,
            None,
            None,
            None,
            None,
        ),
        entry(
            6,
            40,
            "Voo de volta",
            "GIG → GRU, despachar mala",
            Category::Transporte,
            5,
            Some("07:45:00"),
            Some("09:00:00"),
            None,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn backend() -> DevBackend {
        DevBackend::with_activities(seed_dev_activities(date!(2024 - 03 - 04)))
    }

    fn payload() -> ActivityPayload {
        ActivityPayload {
            title: "Museu".to_string(),
            image: None,
            description: "Museu do Amanhã".to_string(),
            location_url: None,
            date: "2024-03-10".to_string(),
            start_time: None,
            end_time: None,
            estimated_cost: None,
            category: Category::Passeio,
            priority: 2,
            status: Some(Status::Cancelada),
        }
    }

    #[test]
    fn create_assigns_id_and_pending_status() {
        let dev = backend();
        let created = dev.create(&payload());
        assert_eq!(created.id, 7);
        assert_eq!(created.status, Status::Pendente);
        assert_eq!(dev.get(7), Some(created));
    }

    #[test]
    fn single_filters_narrow_and_combinations_match_nothing() {
        let dev = backend();
        let passeios = dev.list(&ActivityFilter {
            category: Some(Category::Passeio),
            ..Default::default()
        });
        assert_eq!(passeios.len(), 2);

        let cristo = dev.list(&ActivityFilter {
            title: Some("cristo".to_string()),
            category: Some(Category::Passeio),
            ..Default::default()
        });
        assert!(cristo.is_empty());

        let cristo = dev.list(&ActivityFilter {
            title: Some("cristo".to_string()),
            ..Default::default()
        });
        assert_eq!(cristo.len(), 1);
        assert_eq!(cristo[0].id, 3);

        let blank_title = dev.list(&ActivityFilter {
            title: Some("  ".to_string()),
            ..Default::default()
        });
        assert_eq!(blank_title.len(), 6);

        let by_date = dev.list(&ActivityFilter {
            date: Some("2024-03-05".to_string()),
            ..Default::default()
        });
        assert_eq!(by_date.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn update_delete_and_status_changes() {
        let dev = backend();
        let updated = dev.update(1, &payload()).unwrap();
        assert_eq!(updated.title, "Museu");
        assert_eq!(updated.status, Status::Pendente);
        assert!(dev.update(99, &payload()).is_none());

        assert!(dev.set_status(2, Status::Concluida));
        assert_eq!(dev.get(2).unwrap().status, Status::Concluida);
        assert!(!dev.set_status(99, Status::Concluida));

        assert!(dev.delete(2));
        assert!(!dev.delete(2));
        assert!(dev.get(2).is_none());
    }
}
