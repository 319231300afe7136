pub mod health;

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /services                              list active services (public)
/// /services/{id}                         get active service (public)
/// /gallery                               list active items (?category, ?featured)
/// /banners                               list live banners (?placement)
/// /business-info                         salon info + opening hours (GET)
/// /hero-settings                         homepage hero (GET)
/// /options/nail-shapes                   active shapes for the booking form
/// /options/nail-styles                   active styles for the booking form
/// /bookings                              submit a booking (POST)
/// /bookings/availability                 slot grid (?date, ?service_id)
/// /contacts                              submit an inquiry (POST)
///
/// /auth/login                            login (public)
/// /auth/refresh                          rotate refresh token (public)
/// /auth/logout                           revoke one session (public)
/// /auth/logout-all                       revoke all sessions (requires auth)
/// /auth/me                               current user profile (requires auth)
///
/// /admin/services                        list, create (admin)
/// /admin/services/{id}                   update, delete (admin)
/// /admin/gallery                         list, create (admin)
/// /admin/gallery/{id}                    update, delete (admin)
/// /admin/banners                         list, create (admin)
/// /admin/banners/{id}                    update, delete (admin)
/// /admin/business-info                   replace singleton (PUT, admin)
/// /admin/hero-settings                   replace singleton (PUT, admin)
/// /admin/options/nail-shapes             list, create (admin)
/// /admin/options/nail-shapes/{id}        deactivate (DELETE, admin)
/// /admin/options/nail-styles             list, create (admin)
/// /admin/options/nail-styles/{id}        deactivate (DELETE, admin)
/// /admin/bookings                        list (?status, ?date) (staff)
/// /admin/bookings/{id}                   get, update, delete (staff)
/// /admin/bookings/{id}/status            transition status (PATCH, staff)
/// /admin/contacts                        list (?status) (staff)
/// /admin/contacts/{id}                   get, delete (staff)
/// /admin/contacts/{id}/status            transition status (PATCH, staff)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public_router())
        .nest("/auth", auth_router())
        .nest("/admin", admin_router())
}

/// Public site routes: no authentication required.
fn public_router() -> Router<AppState> {
    Router::new()
        .route("/services", get(handlers::services::list_services))
        .route("/services/{id}", get(handlers::services::get_service))
        .route("/gallery", get(handlers::gallery::list_gallery))
        .route("/banners", get(handlers::banners::list_banners))
        .route("/business-info", get(handlers::site::get_business_info))
        .route("/hero-settings", get(handlers::site::get_hero_settings))
        .route(
            "/options/nail-shapes",
            get(handlers::options::list_nail_shapes),
        )
        .route(
            "/options/nail-styles",
            get(handlers::options::list_nail_styles),
        )
        .route("/bookings", post(handlers::bookings::create_booking))
        .route(
            "/bookings/availability",
            get(handlers::bookings::availability),
        )
        .route("/contacts", post(handlers::contacts::create_contact))
}

/// Authentication routes.
fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/logout", post(handlers::auth::logout))
        .route("/logout-all", post(handlers::auth::logout_all))
        .route("/me", get(handlers::auth::me))
}

/// Admin dashboard routes. Authorization is enforced per handler via the
/// `RequireAdmin`/`RequireStaff` extractors, so the split between content
/// management (admin) and queue work (staff) lives next to each handler.
fn admin_router() -> Router<AppState> {
    Router::new()
        // Service catalog (admin).
        .route(
            "/services",
            get(handlers::services::admin_list_services).post(handlers::services::create_service),
        )
        .route(
            "/services/{id}",
            put(handlers::services::update_service).delete(handlers::services::delete_service),
        )
        // Gallery (admin).
        .route(
            "/gallery",
            get(handlers::gallery::admin_list_gallery).post(handlers::gallery::create_gallery_item),
        )
        .route(
            "/gallery/{id}",
            put(handlers::gallery::update_gallery_item)
                .delete(handlers::gallery::delete_gallery_item),
        )
        // Banners (admin).
        .route(
            "/banners",
            get(handlers::banners::admin_list_banners).post(handlers::banners::create_banner),
        )
        .route(
            "/banners/{id}",
            put(handlers::banners::update_banner).delete(handlers::banners::delete_banner),
        )
        // Site singletons (admin).
        .route("/business-info", put(handlers::site::save_business_info))
        .route("/hero-settings", put(handlers::site::save_hero_settings))
        // Booking-form options (admin).
        .route(
            "/options/nail-shapes",
            get(handlers::options::admin_list_nail_shapes)
                .post(handlers::options::create_nail_shape),
        )
        .route(
            "/options/nail-shapes/{id}",
            axum::routing::delete(handlers::options::delete_nail_shape),
        )
        .route(
            "/options/nail-styles",
            get(handlers::options::admin_list_nail_styles)
                .post(handlers::options::create_nail_style),
        )
        .route(
            "/options/nail-styles/{id}",
            axum::routing::delete(handlers::options::delete_nail_style),
        )
        // Booking queue (staff).
        .route("/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/bookings/{id}",
            get(handlers::bookings::get_booking)
                .put(handlers::bookings::update_booking)
                .delete(handlers::bookings::delete_booking),
        )
        .route(
            "/bookings/{id}/status",
            patch(handlers::bookings::change_booking_status),
        )
        // Contact inbox (staff).
        .route("/contacts", get(handlers::contacts::list_contacts))
        .route(
            "/contacts/{id}",
            get(handlers::contacts::get_contact).delete(handlers::contacts::delete_contact),
        )
        .route(
            "/contacts/{id}/status",
            patch(handlers::contacts::change_contact_status),
        )
}
