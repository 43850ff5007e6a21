use super::*;
use actix_web::HttpResponse;
use actix_web::web;

pub async fn register(
    store: web::Data<Credentials>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, CredentialError> {
    let user = store.register(&req.username, &req.password).await?;
    log::info!("registered {}", user.username());
    Ok(HttpResponse::Ok().json(user.profile()))
}

pub async fn login(
    store: web::Data<Credentials>,
    policy: web::Data<CookiePolicy>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, CredentialError> {
    let token = store.login(&req.username, &req.password).await?;
    log::debug!("issued session for {}", req.username);
    Ok(HttpResponse::Ok()
        .cookie(policy.issue(token))
        .json(LoginResponse { success: true }))
}

/// Clears the cookie. Tokens are not revocable, so any copy of the
/// token remains usable until its expiry.
pub async fn logout(policy: web::Data<CookiePolicy>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(policy.clear())
        .body("User logged out")
}

pub async fn me(auth: Auth) -> HttpResponse {
    HttpResponse::Ok().json(Identity {
        username: auth.username().to_string(),
    })
}

pub async fn get_user(
    auth: Auth,
    store: web::Data<Credentials>,
    path: web::Path<String>,
) -> Result<HttpResponse, CredentialError> {
    let username = path.into_inner();
    log::debug!("{} looked up {}", auth.username(), username);
    let user = store.get_user(&username).await?;
    Ok(HttpResponse::Ok().json(user.profile()))
}
