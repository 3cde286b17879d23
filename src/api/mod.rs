use crate::error::{Context, Result, simple_error};
use serde::Deserialize;
use std::sync::mpsc;

/// Collection endpoint queried when no override is given on the command line.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// One user record as returned by the directory API.
///
/// Every field is `#[serde(default)]`: records with missing or renamed fields
/// still deserialize and simply render with blank values.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// Source of user records. Implemented over HTTP in production and by stubs
/// in tests.
pub trait UserDirectory {
    fn fetch_users(&self) -> Result<Vec<UserRecord>>;
}

pub struct HttpUserDirectory {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpUserDirectory {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            agent: ureq::Agent::new(),
        }
    }
}

impl UserDirectory for HttpUserDirectory {
    fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        match self.agent.get(&self.endpoint).call() {
            Ok(resp) => {
                let users: Vec<UserRecord> = resp
                    .into_json()
                    .with_ctx(|| format!("decode response from {}", self.endpoint))?;
                Ok(users)
            }
            // Non-success status: the body is not read.
            Err(ureq::Error::Status(code, _)) => Err(simple_error(format!(
                "{} returned status {}",
                self.endpoint, code
            ))),
            Err(e) => Err(simple_error(format!(
                "request to {} failed: {}",
                self.endpoint, e
            ))),
        }
    }
}

/// Result of the one fetch issued per activation. `Failed` carries the
/// underlying cause for logging; the view shows a fixed message instead.
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded(Vec<UserRecord>),
    Failed(String),
}

/// Run `directory.fetch_users()` on a worker thread and deliver the outcome
/// over a channel. The receiver side may be dropped before the worker
/// finishes; the late send error is ignored.
pub fn spawn_fetch<D>(directory: D) -> mpsc::Receiver<FetchOutcome>
where
    D: UserDirectory + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let outcome = match directory.fetch_users() {
            Ok(users) => {
                tracing::debug!(count = users.len(), "fetched user records");
                FetchOutcome::Loaded(users)
            }
            Err(e) => {
                tracing::warn!(error = %e, "user fetch failed");
                FetchOutcome::Failed(e.to_string())
            }
        };
        let _ = tx.send(outcome);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const RECORD_JSON: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn record_deserializes_all_fields() {
        let u: UserRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert_eq!(u.id, 1);
        assert_eq!(u.name, "Leanne Graham");
        assert_eq!(u.username, "Bret");
        assert_eq!(u.email, "Sincere@april.biz");
        assert_eq!(u.phone, "1-770-736-8031 x56442");
        assert_eq!(u.website, "hildegard.org");
        assert_eq!(u.address.street, "Kulas Light");
        assert_eq!(u.address.suite, "Apt. 556");
        assert_eq!(u.address.city, "Gwenborough");
        assert_eq!(u.address.zipcode, "92998-3874");
        assert_eq!(u.address.geo.lat, "-37.3159");
        assert_eq!(u.address.geo.lng, "81.1496");
        assert_eq!(u.company.name, "Romaguera-Crona");
        assert_eq!(u.company.catch_phrase, "Multi-layered client-server neural-net");
        assert_eq!(u.company.bs, "harness real-time e-markets");
    }

    #[test]
    fn missing_fields_default_to_blank() {
        // A sparse record still parses; absent fields come back empty.
        let u: UserRecord = serde_json::from_str(r#"{"id": 7, "name": "Nameless"}"#).unwrap();
        assert_eq!(u.id, 7);
        assert_eq!(u.name, "Nameless");
        assert_eq!(u.username, "");
        assert_eq!(u.address.street, "");
        assert_eq!(u.address.geo.lat, "");
        assert_eq!(u.company.catch_phrase, "");
    }

    #[test]
    fn empty_array_parses_to_no_records() {
        let users: Vec<UserRecord> = serde_json::from_str("[]").unwrap();
        assert!(users.is_empty());
    }

    struct StubDirectory {
        result: std::result::Result<Vec<UserRecord>, String>,
    }

    impl UserDirectory for StubDirectory {
        fn fetch_users(&self) -> Result<Vec<UserRecord>> {
            match &self.result {
                Ok(users) => Ok(users.clone()),
                Err(msg) => Err(simple_error(msg.clone())),
            }
        }
    }

    #[test]
    fn spawn_fetch_delivers_loaded_outcome() {
        let record: UserRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let rx = spawn_fetch(StubDirectory {
            result: Ok(vec![record]),
        });
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            FetchOutcome::Loaded(users) => {
                assert_eq!(users.len(), 1);
                assert_eq!(users[0].name, "Leanne Graham");
            }
            FetchOutcome::Failed(detail) => panic!("unexpected failure: {detail}"),
        }
    }

    #[test]
    fn spawn_fetch_delivers_failed_outcome_with_detail() {
        let rx = spawn_fetch(StubDirectory {
            result: Err("connection refused".to_string()),
        });
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            FetchOutcome::Failed(detail) => assert!(detail.contains("connection refused")),
            FetchOutcome::Loaded(_) => panic!("expected failure"),
        }
    }
}
