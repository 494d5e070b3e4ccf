use crate::server::data::favourite::FavouriteRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod is_favourite;
