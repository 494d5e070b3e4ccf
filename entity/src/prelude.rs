pub use super::advertisement::Entity as Advertisement;
pub use super::app_setting::Entity as AppSetting;
pub use super::app_user::Entity as AppUser;
pub use super::card::Entity as Card;
pub use super::city::Entity as City;
pub use super::city_restriction::Entity as CityRestriction;
pub use super::favourite_team::Entity as FavouriteTeam;
pub use super::fixture::Entity as Fixture;
pub use super::goal::Entity as Goal;
pub use super::league::Entity as League;
pub use super::league_group::Entity as LeagueGroup;
pub use super::league_ranking_status::Entity as LeagueRankingStatus;
pub use super::match_news::Entity as MatchNews;
pub use super::match_news_content::Entity as MatchNewsContent;
pub use super::match_news_photo::Entity as MatchNewsPhoto;
pub use super::match_squad::Entity as MatchSquad;
pub use super::match_squad_formation::Entity as MatchSquadFormation;
pub use super::match_substitution::Entity as MatchSubstitution;
pub use super::photo_gallery::Entity as PhotoGallery;
pub use super::player::Entity as Player;
pub use super::player_suspension::Entity as PlayerSuspension;
pub use super::player_transfer_request::Entity as PlayerTransferRequest;
pub use super::rich_static_content::Entity as RichStaticContent;
pub use super::season::Entity as Season;
pub use super::static_key_value::Entity as StaticKeyValue;
pub use super::story::Entity as Story;
pub use super::story_content::Entity as StoryContent;
pub use super::team::Entity as Team;
pub use super::team_penalty::Entity as TeamPenalty;
pub use super::week::Entity as Week;
pub use super::week_best_team::Entity as WeekBestTeam;
pub use super::week_best_team_player::Entity as WeekBestTeamPlayer;
