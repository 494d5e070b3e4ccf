//! SeaORM entities for the league database.
//!
//! Every table the server reads or writes has a module here. Foreign keys are
//! declared through `Relation` so that `Schema::create_table_from_entity`
//! produces the same constraints the migrations create.

pub mod prelude;

pub mod advertisement;
pub mod app_setting;
pub mod app_user;
pub mod card;
pub mod city;
pub mod city_restriction;
pub mod favourite_team;
pub mod fixture;
pub mod goal;
pub mod league;
pub mod league_group;
pub mod league_ranking_status;
pub mod match_news;
pub mod match_news_content;
pub mod match_news_photo;
pub mod match_squad;
pub mod match_squad_formation;
pub mod match_substitution;
pub mod photo_gallery;
pub mod player;
pub mod player_suspension;
pub mod player_transfer_request;
pub mod rich_static_content;
pub mod season;
pub mod static_key_value;
pub mod story;
pub mod story_content;
pub mod team;
pub mod team_penalty;
pub mod week;
pub mod week_best_team;
pub mod week_best_team_player;
