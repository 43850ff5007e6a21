use super::*;
use actix_web::HttpResponse;
use actix_web::web;

#[derive(serde::Serialize)]
struct TodaysWord<'a> {
    word: &'a str,
}

pub async fn words(pool: web::Data<WordPool>) -> HttpResponse {
    HttpResponse::Ok().json(pool.dictionary().words())
}

pub async fn todays_word(pool: web::Data<WordPool>) -> Result<HttpResponse, PoolError> {
    let word = pool.current().await?;
    Ok(HttpResponse::Ok().json(TodaysWord { word: &word }))
}
