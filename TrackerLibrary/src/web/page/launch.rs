use actix_web::{get, post, web, Scope, HttpResponse, Responder};
use crate::utils::static_files::StaticFiles;
use crate::web::utils::response::OperationStatus;
use crate::management::run_manager::RunManager;
use crate::management::utils::run_parameters::RunParameters;

pub fn initialize() -> Scope {
    web::scope("/launch")
        .service(page)
        .service(start)
        .service(stop)
        .service(status)
}

#[get("")]
async fn page() -> impl Responder {
    let html = StaticFiles::get("html/launch.html").expect("File not found in static files.").data;
    HttpResponse::Ok().content_type("text/html").body(html)
}

#[post("/start")]
async fn start(parameters: web::Json<RunParameters>) -> impl Responder {
    let parameters = parameters.into_inner();
    if !parameters.validate() {
        return HttpResponse::BadRequest().json(web::Json(OperationStatus::new(false, Some("Invalid run parameters.".to_string()))));
    }
    match RunManager::start(parameters).await {
        Ok(_) => HttpResponse::Ok().json(web::Json(OperationStatus::new(true, None))),
        Err(error) => HttpResponse::BadRequest().json(web::Json(OperationStatus::new(false, Some(error)))),
    }
}

#[post("/stop")]
async fn stop() -> impl Responder {
    if RunManager::stop().await {
        HttpResponse::Ok().json(web::Json(OperationStatus::new(true, None)))
    } else {
        HttpResponse::BadRequest().json(web::Json(OperationStatus::new(false, Some("No active run.".to_string()))))
    }
}

#[get("/status")]
async fn status() -> impl Responder {
    let status = RunManager::status().await;
    HttpResponse::Ok().json(web::Json(status))
}
