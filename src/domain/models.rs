use serde::Serialize;

/// Win/loss counter for one match type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    pub fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn played(&self) -> u32 {
        self.wins + self.losses
    }
}

impl std::ops::AddAssign for WinLoss {
    fn add_assign(&mut self, other: Self) {
        self.wins += other.wins;
        self.losses += other.losses;
    }
}

/// A player's aggregated record across every match looked at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub singles: WinLoss,
    pub doubles: WinLoss,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            singles: WinLoss::default(),
            doubles: WinLoss::default(),
        }
    }
}

/// Identifiers of one fixture, taken from a results row's click handler
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchReference {
    pub season_id: String,
    pub match_id: String,
}

impl MatchReference {
    pub fn new(season_id: impl Into<String>, match_id: impl Into<String>) -> Self {
        Self {
            season_id: season_id.into(),
            match_id: match_id.into(),
        }
    }

    /// Relative URL of the match popup, resolved against the results page
    pub fn popup_path(&self) -> String {
        format!(
            "match_popup.php?seasonid={}&matchid={}",
            urlencoding::encode(&self.season_id),
            urlencoding::encode(&self.match_id)
        )
    }
}

impl std::fmt::Display for MatchReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "season {} match {}", self.season_id, self.match_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Singles,
    Doubles,
}

/// Where the player sits in one fixture's rosters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participation {
    pub side: Side,
    /// 1-based roster position
    pub position: usize,
}

/// One set line of a match popup: `[home positions, score, away positions]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRow {
    pub home_positions: String,
    pub score: String,
    pub away_positions: String,
}

impl SetRow {
    pub fn new(
        home_positions: impl Into<String>,
        score: impl Into<String>,
        away_positions: impl Into<String>,
    ) -> Self {
        Self {
            home_positions: home_positions.into(),
            score: score.into(),
            away_positions: away_positions.into(),
        }
    }

    /// A single position token (e.g. `1`) is singles; concatenated ones (`12`) are doubles.
    pub fn match_type(&self) -> MatchType {
        if self.home_positions.trim().chars().count() == 1 {
            MatchType::Singles
        } else {
            MatchType::Doubles
        }
    }

    pub fn positions(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_positions,
            Side::Away => &self.away_positions,
        }
    }

    /// The score token belonging to `side`, if the score has one
    pub fn games_for(&self, side: Side) -> Option<&str> {
        let mut tokens = self.score.split('-').map(str::trim);
        match side {
            Side::Home => tokens.next(),
            Side::Away => tokens.nth(1),
        }
    }
}

/// Parsed contents of one match popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDetail {
    pub home_roster: Vec<String>,
    pub away_roster: Vec<String>,
    pub sets: Vec<SetRow>,
}
