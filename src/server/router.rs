use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        city, content, favourite, fixture, health, league, news, player, search, standings,
        statistics, team, transfer, web, week,
    },
    middleware::api_key::{require_admin_key, require_api_key, ADMIN_KEY_HEADER, API_KEY_HEADER},
    state::AppState,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        );
        components.add_security_scheme(
            "admin_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_KEY_HEADER))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cupboard",
        description = "League content and statistics API for the mobile app, website and admin panel",
    ),
    paths(
        health::health,
        city::list_cities,
        city::city_leagues,
        city::actual_matches,
        city::menu_leagues,
        city::menu_teams,
        content::app_settings,
        content::static_values,
        content::rich_content,
        content::advertisements,
        content::photos,
        content::stories,
        content::upsert_static_value,
        league::seasons,
        league::groups,
        league::weeks,
        league::team_current_weeks,
        fixture::details,
        fixture::squads,
        fixture::announcer_matches,
        fixture::add_substitution,
        fixture::update_score,
        team::squad,
        team::leagues,
        team::season_matches,
        team::season_players,
        team::season_stats,
        player::details,
        player::valuable,
        standings::league,
        standings::team,
        statistics::league,
        statistics::league_players,
        statistics::top_players,
        statistics::top_teams,
        week::suspensions,
        week::best_team,
        search::search,
        news::actual,
        news::localized,
        news::admin_list,
        news::admin_get,
        news::create,
        news::update,
        news::upsert_content,
        news::toggle_publish,
        news::delete_photo,
        news::translate,
        news::translate_many,
        transfer::create,
        transfer::approve,
        transfer::reject,
        transfer::list_for_user,
        favourite::add_user_to_all,
        favourite::add_team,
        favourite::remove_team,
        favourite::is_favourite,
        favourite::push_send,
        web::cities,
        web::city_teams,
        web::city_leagues,
        web::city_news,
        web::main_news,
        web::news_by_id,
        web::last_matches,
        web::best_eleven,
        web::city_standings,
        web::team,
        web::roster,
        web::team_matches,
        web::league_weeks,
        web::week_matches,
        web::actual_week_matches,
        web::match_details,
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

/// Routes the mobile app may call before it holds a key.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/cities", get(city::list_cities))
        .route("/api/cities/{city_id}/leagues", get(city::city_leagues))
        .route(
            "/api/cities/{city_id}/actual-matches",
            get(city::actual_matches),
        )
}

/// Mobile app surface behind `X-Api-Key`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/settings", get(content::app_settings))
        .route("/api/static-values", get(content::static_values))
        .route("/api/rich-content", get(content::rich_content))
        .route("/api/advertisements", get(content::advertisements))
        .route("/api/photos", get(content::photos))
        .route("/api/stories", get(content::stories))
        .route("/api/cities/{city_id}/menu/leagues", get(city::menu_leagues))
        .route("/api/cities/{city_id}/menu/teams", get(city::menu_teams))
        .route(
            "/api/cities/{city_id}/valuable-players",
            get(player::valuable),
        )
        .route("/api/leagues/{league_id}/seasons", get(league::seasons))
        .route(
            "/api/leagues/{league_id}/seasons/{season_id}/groups",
            get(league::groups),
        )
        .route(
            "/api/leagues/{league_id}/seasons/{season_id}/weeks",
            get(league::weeks),
        )
        .route(
            "/api/leagues/{league_id}/seasons/{season_id}/standings",
            get(standings::league),
        )
        .route(
            "/api/leagues/{league_id}/seasons/{season_id}/statistics",
            get(statistics::league),
        )
        .route(
            "/api/leagues/{league_id}/seasons/{season_id}/player-statistics",
            get(statistics::league_players),
        )
        .route(
            "/api/leagues/{league_id}/seasons/{season_id}/top-players",
            get(statistics::top_players),
        )
        .route(
            "/api/leagues/{league_id}/seasons/{season_id}/top-teams",
            get(statistics::top_teams),
        )
        .route("/api/matches/{match_id}", get(fixture::details))
        .route("/api/matches/{match_id}/squads", get(fixture::squads))
        .route(
            "/api/announcer/cities/{city_id}/matches",
            get(fixture::announcer_matches),
        )
        .route(
            "/api/announcer/substitutions",
            post(fixture::add_substitution),
        )
        .route("/api/announcer/goals", post(fixture::update_score))
        .route("/api/teams/{team_id}/squad", get(team::squad))
        .route("/api/teams/{team_id}/leagues", get(team::leagues))
        .route(
            "/api/teams/{team_id}/current-weeks",
            get(league::team_current_weeks),
        )
        .route("/api/teams/{team_id}/favourite", get(favourite::is_favourite))
        .route(
            "/api/teams/{team_id}/seasons/{season_id}/matches",
            get(team::season_matches),
        )
        .route(
            "/api/teams/{team_id}/seasons/{season_id}/players",
            get(team::season_players),
        )
        .route(
            "/api/teams/{team_id}/seasons/{season_id}/stats",
            get(team::season_stats),
        )
        .route(
            "/api/teams/{team_id}/seasons/{season_id}/standings",
            get(standings::team),
        )
        .route("/api/players/{player_id}", get(player::details))
        .route("/api/weeks/{week_id}/suspensions", get(week::suspensions))
        .route("/api/weeks/{week_id}/best-team", get(week::best_team))
        .route("/api/search", get(search::search))
        .route("/api/news", get(news::actual))
        .route("/api/news/localized", get(news::localized))
        .route("/api/transfers", post(transfer::create))
        .route(
            "/api/transfers/{request_id}/approve",
            post(transfer::approve),
        )
        .route("/api/transfers/{request_id}/reject", post(transfer::reject))
        .route(
            "/api/users/{user_id}/transfers",
            get(transfer::list_for_user),
        )
        .route("/api/favourites", post(favourite::add_team))
        .route("/api/favourites/remove", post(favourite::remove_team))
        .route(
            "/api/favourites/all-users",
            post(favourite::add_user_to_all),
        )
}

/// Website surface behind `X-Api-Key`.
fn web_routes() -> Router<AppState> {
    Router::new()
        .route("/web-api/cities", get(web::cities))
        .route("/web-api/cities/{city_id}/teams", get(web::city_teams))
        .route("/web-api/cities/{city_id}/leagues", get(web::city_leagues))
        .route("/web-api/cities/{city_id}/news", get(web::city_news))
        .route(
            "/web-api/cities/{city_id}/last-matches",
            get(web::last_matches),
        )
        .route(
            "/web-api/cities/{city_id}/best-eleven",
            get(web::best_eleven),
        )
        .route(
            "/web-api/cities/{city_id}/standings",
            get(web::city_standings),
        )
        .route("/web-api/news/main", get(web::main_news))
        .route("/web-api/news/{news_id}", get(web::news_by_id))
        .route("/web-api/teams/{team_id}", get(web::team))
        .route("/web-api/teams/{team_id}/roster", get(web::roster))
        .route("/web-api/teams/{team_id}/matches", get(web::team_matches))
        .route(
            "/web-api/leagues/{league_id}/weeks",
            get(web::league_weeks),
        )
        .route(
            "/web-api/leagues/{league_id}/weeks/{week_id}/matches",
            get(web::week_matches),
        )
        .route(
            "/web-api/leagues/{league_id}/actual-week",
            get(web::actual_week_matches),
        )
        .route("/web-api/matches/{match_id}", get(web::match_details))
}

/// Content management behind `X-Admin-Key`.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/news", get(news::admin_list).post(news::create))
        .route(
            "/admin/news/{news_id}",
            get(news::admin_get).put(news::update),
        )
        .route(
            "/admin/news/{news_id}/contents/{culture}",
            put(news::upsert_content),
        )
        .route(
            "/admin/news/{news_id}/toggle-publish",
            post(news::toggle_publish),
        )
        .route("/admin/news/photos/{photo_id}", delete(news::delete_photo))
        .route("/admin/translate", post(news::translate))
        .route("/admin/translate/many", post(news::translate_many))
        .route(
            "/admin/static-values/{key}",
            put(content::upsert_static_value),
        )
        .route("/admin/push", post(favourite::push_send))
}

/// Assembles every surface with its key guard, the API docs and CORS.
pub fn router(state: AppState) -> Router {
    let keyed = Router::new()
        .merge(api_routes())
        .merge(web_routes())
        .route_layer(from_fn_with_state(state.clone(), require_api_key));

    let admin =
        admin_routes().route_layer(from_fn_with_state(state.clone(), require_admin_key));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public_routes())
        .merge(keyed)
        .merge(admin)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
