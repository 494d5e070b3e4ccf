pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_city_table;
mod m20260301_000002_create_league_table;
mod m20260301_000003_create_season_table;
mod m20260301_000004_create_league_group_table;
mod m20260301_000005_create_week_table;
mod m20260301_000006_create_league_ranking_status_table;
mod m20260301_000007_create_team_table;
mod m20260301_000008_create_team_penalty_table;
mod m20260301_000009_create_app_user_table;
mod m20260301_000010_create_player_table;
mod m20260301_000011_create_fixture_table;
mod m20260301_000012_create_goal_table;
mod m20260301_000013_create_card_table;
mod m20260301_000014_create_match_squad_table;
mod m20260301_000015_create_match_substitution_table;
mod m20260301_000016_create_player_suspension_table;
mod m20260301_000017_create_week_best_team_table;
mod m20260301_000018_create_player_transfer_request_table;
mod m20260301_000019_create_favourite_team_table;
mod m20260301_000020_create_match_news_table;
mod m20260301_000021_create_advertisement_table;
mod m20260301_000022_create_static_content_tables;
mod m20260301_000023_create_story_and_gallery_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_city_table::Migration),
            Box::new(m20260301_000002_create_league_table::Migration),
            Box::new(m20260301_000003_create_season_table::Migration),
            Box::new(m20260301_000004_create_league_group_table::Migration),
            Box::new(m20260301_000005_create_week_table::Migration),
            Box::new(m20260301_000006_create_league_ranking_status_table::Migration),
            Box::new(m20260301_000007_create_team_table::Migration),
            Box::new(m20260301_000008_create_team_penalty_table::Migration),
            Box::new(m20260301_000009_create_app_user_table::Migration),
            Box::new(m20260301_000010_create_player_table::Migration),
            Box::new(m20260301_000011_create_fixture_table::Migration),
            Box::new(m20260301_000012_create_goal_table::Migration),
            Box::new(m20260301_000013_create_card_table::Migration),
            Box::new(m20260301_000014_create_match_squad_table::Migration),
            Box::new(m20260301_000015_create_match_substitution_table::Migration),
            Box::new(m20260301_000016_create_player_suspension_table::Migration),
            Box::new(m20260301_000017_create_week_best_team_table::Migration),
            Box::new(m20260301_000018_create_player_transfer_request_table::Migration),
            Box::new(m20260301_000019_create_favourite_team_table::Migration),
            Box::new(m20260301_000020_create_match_news_table::Migration),
            Box::new(m20260301_000021_create_advertisement_table::Migration),
            Box::new(m20260301_000022_create_static_content_tables::Migration),
            Box::new(m20260301_000023_create_story_and_gallery_tables::Migration),
        ]
    }
}
