use actix_web::{HttpRequest, HttpResponse, Responder};

pub async fn default_route(_req: HttpRequest) -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/launch"))
        .finish()
}
