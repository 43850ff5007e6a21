use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use prodle_auth::Auth;

/// The target account comes from the session, never from the body.
pub async fn update_results(
    auth: Auth,
    keeper: web::Data<Scorekeeper>,
    req: web::Json<OutcomeRequest>,
) -> Result<HttpResponse, StatsError> {
    let user = keeper.report(auth.username(), &req.value).await?;
    Ok(HttpResponse::Ok().json(user.profile()))
}
