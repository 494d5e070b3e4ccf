use crate::{
    model::search::SearchResultType,
    server::{error::AppError, service::search::SearchService},
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, league::LeagueFactory, player::PlayerFactory, team::TeamFactory},
};

mod search;
