use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::products as products_service;

/// Returns the product count together with every product as JSON.
#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match products_service::load_catalog(repo.get_ref()) {
        Ok(catalog) => HttpResponse::Ok().json(catalog),
        Err(err) => {
            log::error!("Failed to load products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
