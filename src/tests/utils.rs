use crate::config::DEFAULT_REVYOOS_WIDGET_CODE;
use crate::db::connection::{init_db, Database};
use crate::db::properties;
use crate::domain::{CityInput, Property, PropertyInput};
use crate::hospitable::HospitableClient;
use crate::state::AppState;
use astra::{Body, Request, Response};
use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Initialize a fresh test DB using the production schema. Every call gets its
/// own file so tests can run in parallel.
pub fn init_test_db() -> Database {
    let n = NEXT_DB.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "stay_directly_test_{}_{n}.sqlite",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// App state over a fresh database, with no Hospitable token.
pub fn test_state() -> AppState {
    AppState {
        db: init_test_db(),
        hospitable: None,
        revyoos_widget_code: DEFAULT_REVYOOS_WIDGET_CODE.to_string(),
        hospitable_search_identifier: Some("test-search-id".to_string()),
    }
}

/// App state whose Hospitable client points at `base_url`.
pub fn test_state_with_upstream(base_url: &str) -> AppState {
    AppState {
        hospitable: Some(
            HospitableClient::new(base_url, "test-token").expect("hospitable client"),
        ),
        ..test_state()
    }
}

/// Serve the canned `(status, body)` replies in order on a loopback port, one
/// connection each. Returns the base URL and every raw request received.
pub fn stub_upstream(replies: Vec<(u16, String)>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub address");
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        for (status, body) in replies {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let _ = tx.send(read_http_request(&stream));
            let reply = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        }
    });

    (format!("http://{addr}/v2"), rx)
}

fn read_http_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut raw = String::new();
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
        raw.push_str(&line);
        if line == "\r\n" {
            break;
        }
    }
    let mut body = vec![0; content_length];
    let _ = reader.read_exact(&mut body);
    raw.push_str(&String::from_utf8_lossy(&body));
    raw
}

/// A create payload with every required field filled in.
pub fn property_input(name: &str, city: &str, price: i64) -> PropertyInput {
    PropertyInput {
        name: Some(name.to_string()),
        description: Some(format!("{name} description")),
        location: Some(format!("{city}, FL")),
        city: Some(city.to_string()),
        country: Some("USA".to_string()),
        price: Some(price),
        image_url: Some("https://img.example/main.jpg".to_string()),
        bedrooms: Some(2),
        bathrooms: Some(1),
        max_guests: Some(4),
        host_id: Some(1),
        host_name: Some("Maria".to_string()),
        ..PropertyInput::default()
    }
}

pub fn city_input(name: &str) -> CityInput {
    CityInput {
        name: Some(name.to_string()),
        country: Some("USA".to_string()),
        description: Some(format!("Visit {name}")),
        image_url: Some("https://img.example/city.jpg".to_string()),
        ..CityInput::default()
    }
}

/// An in-memory property for template tests.
pub fn sample_property(id: i64, name: &str) -> Property {
    let new = property_input(name, "Miami", 200)
        .validate()
        .expect("valid sample property");
    Property {
        id,
        name: new.name,
        slug: new.slug,
        description: new.description,
        location: new.location,
        city: new.city,
        country: new.country,
        price: new.price,
        rating: None,
        review_count: 0,
        image_url: new.image_url,
        additional_images: new.additional_images,
        bedrooms: new.bedrooms,
        bathrooms: new.bathrooms,
        max_guests: new.max_guests,
        property_type: new.property_type,
        amenities: new.amenities,
        host_id: new.host_id,
        host_name: new.host_name,
        host_image: None,
        booking_widget_url: None,
        review_widget_code: None,
        is_featured: false,
        is_active: true,
        created_at: chrono::Utc::now().naive_utc(),
    }
}

pub fn seed_property(state: &AppState, input: PropertyInput) -> Property {
    let new = input.validate().expect("valid property input");
    state
        .db
        .with_conn(|conn| properties::create(conn, &new))
        .expect("insert property")
}

pub fn get(uri: &str) -> Request {
    request("GET", uri, None)
}

pub fn request(method: &str, uri: &str, body: Option<Value>) -> Request {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body)
        .expect("valid test request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = resp.into_body();
    let mut out = String::new();
    body.reader()
        .read_to_string(&mut out)
        .expect("readable response body");
    out
}

pub fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("JSON response body")
}
