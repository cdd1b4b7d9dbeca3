use std::sync::Mutex;

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::tracker::GradeTracker;

type Tracker = web::Data<Mutex<GradeTracker>>;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({"success": true}))
}

#[post("/students")]
pub async fn add_student(req: HttpRequest, tracker: Tracker) -> impl Responder {
    let request_headers = req.headers();

    // a missing header is treated the same as an empty form field
    let name = request_headers
        .get("name")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    let grade = request_headers
        .get("grade")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    let mut tracker = match tracker.lock() {
        Ok(t) => t,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "State poisoned."}))
        }
    };

    match tracker.add_student(name, grade) {
        Ok(record) => HttpResponse::Ok().json(json!({
            "message": format!("Added student: {} with grade: {}", record.name, record.grade)
        })),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    }
}

#[get("/students")]
pub async fn get_students(tracker: Tracker) -> impl Responder {
    let tracker = match tracker.lock() {
        Ok(t) => t,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "State poisoned."}))
        }
    };

    let json = serde_json::to_string(tracker.roster().records());
    match json {
        Ok(j) => HttpResponse::Ok().body(j),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

#[get("/results")]
pub async fn get_results(tracker: Tracker) -> impl Responder {
    let mut tracker = match tracker.lock() {
        Ok(t) => t,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "State poisoned."}))
        }
    };

    match tracker.calculate() {
        Ok(summary) => {
            let json = serde_json::to_string(&summary);
            match json {
                Ok(j) => HttpResponse::Ok().body(j),
                Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
            }
        }
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    }
}

#[get("/log")]
pub async fn get_log(tracker: Tracker) -> impl Responder {
    let tracker = match tracker.lock() {
        Ok(t) => t,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "State poisoned."}))
        }
    };

    HttpResponse::Ok().json(tracker.activity_log())
}

#[delete("/students")]
pub async fn clear_results(tracker: Tracker) -> impl Responder {
    let mut tracker = match tracker.lock() {
        Ok(t) => t,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "State poisoned."}))
        }
    };

    tracker.clear_results();
    HttpResponse::Ok().json(json!({"message": "Cleared all results."}))
}
