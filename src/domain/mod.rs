pub mod game;
pub mod player;
pub mod schedule;
pub mod skill;

pub use game::{Game, GameFields, GameId, UNTITLED_GAME};
pub use player::{Player, PlayerFields, PlayerId};
pub use schedule::CourtSchedule;
pub use skill::{SkillGrade, SkillLevel, SkillRange, SkillStrength};
