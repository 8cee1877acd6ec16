//! Opening taxonomy and classification.
//!
//! Bucket ids are a persisted string contract: renaming one breaks every
//! stored classification that used it.

pub mod classify;
pub mod lines;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shakmaty::Color;

pub use classify::{classify, classify_as, default_bucket, OpeningClassifier};
pub use lines::{OpeningLine, BUILTIN_LINES, WILDCARD};

/// Disjoint groups of buckets. Each has exactly one catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningCategory {
    WhiteE4,
    WhiteD4,
    WhiteOther,
    BlackVsE4,
    BlackVsD4,
    BlackVsOther,
}

impl OpeningCategory {
    pub fn color(self) -> Color {
        match self {
            OpeningCategory::WhiteE4 | OpeningCategory::WhiteD4 | OpeningCategory::WhiteOther => {
                Color::White
            }
            _ => Color::Black,
        }
    }

    pub fn catch_all(self) -> OpeningBucket {
        match self {
            OpeningCategory::WhiteE4 => OpeningBucket::KingsPawnOther,
            OpeningCategory::WhiteD4 => OpeningBucket::D4Other,
            OpeningCategory::WhiteOther => OpeningBucket::OtherWhite,
            OpeningCategory::BlackVsE4 => OpeningBucket::E4DefenseOther,
            OpeningCategory::BlackVsD4 => OpeningBucket::D4DefenseOther,
            OpeningCategory::BlackVsOther => OpeningBucket::OtherBlack,
        }
    }
}

macro_rules! opening_buckets {
    ($( $variant:ident => $id:literal, $label:literal, $category:ident; )+) => {
        /// One named opening, defense or variation. Declaration order is the
        /// tie-break order used in reports.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum OpeningBucket {
            $( #[serde(rename = $id)] $variant, )+
        }

        impl OpeningBucket {
            pub const ALL: &'static [OpeningBucket] = &[ $( OpeningBucket::$variant, )+ ];

            /// Stable snake_case identifier.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( OpeningBucket::$variant => $id, )+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $( OpeningBucket::$variant => $label, )+
                }
            }

            pub fn category(self) -> OpeningCategory {
                match self {
                    $( OpeningBucket::$variant => OpeningCategory::$category, )+
                }
            }
        }
    };
}

opening_buckets! {
    // White, 1.e4
    ItalianGame => "italian_game", "Italian Game", WhiteE4;
    RuyLopez => "ruy_lopez", "Ruy Lopez", WhiteE4;
    ScotchGame => "scotch_game", "Scotch Game", WhiteE4;
    FourKnights => "four_knights", "Four Knights Game", WhiteE4;
    KingsGambit => "kings_gambit", "King's Gambit", WhiteE4;
    ViennaGame => "vienna_game", "Vienna Game", WhiteE4;
    BishopsOpening => "bishops_opening", "Bishop's Opening", WhiteE4;
    CenterGame => "center_game", "Center Game", WhiteE4;
    PonzianiOpening => "ponziani_opening", "Ponziani Opening", WhiteE4;
    EvansGambit => "evans_gambit", "Evans Gambit", WhiteE4;
    FriedLiverAttack => "fried_liver_attack", "Fried Liver Attack", WhiteE4;
    DanishGambit => "danish_gambit", "Danish Gambit", WhiteE4;
    SmithMorraGambit => "smith_morra_gambit", "Smith-Morra Gambit", WhiteE4;
    AlapinSicilian => "alapin_sicilian", "Alapin Sicilian", WhiteE4;
    ClosedSicilian => "closed_sicilian", "Closed Sicilian", WhiteE4;
    GrandPrixAttack => "grand_prix_attack", "Grand Prix Attack", WhiteE4;
    OpenSicilian => "open_sicilian", "Open Sicilian", WhiteE4;
    FrenchAdvance => "french_advance", "French Advance", WhiteE4;
    CaroKannAdvance => "caro_kann_advance", "Caro-Kann Advance", WhiteE4;
    KingsPawnOther => "kings_pawn_other", "King's Pawn (other)", WhiteE4;

    // White, 1.d4
    QueensGambit => "queens_gambit", "Queen's Gambit", WhiteD4;
    LondonSystem => "london_system", "London System", WhiteD4;
    ColleSystem => "colle_system", "Colle System", WhiteD4;
    CatalanOpening => "catalan_opening", "Catalan Opening", WhiteD4;
    TrompowskyAttack => "trompowsky_attack", "Trompowsky Attack", WhiteD4;
    JobavaLondon => "jobava_london", "Jobava London", WhiteD4;
    BlackmarDiemerGambit => "blackmar_diemer_gambit", "Blackmar-Diemer Gambit", WhiteD4;
    TorreAttack => "torre_attack", "Torre Attack", WhiteD4;
    VeresovAttack => "veresov_attack", "Veresov Attack", WhiteD4;
    D4Other => "d4_other", "Queen's Pawn (other)", WhiteD4;

    // White, flank and irregular first moves
    EnglishOpening => "english_opening", "English Opening", WhiteOther;
    RetiOpening => "reti_opening", "Reti Opening", WhiteOther;
    BirdsOpening => "birds_opening", "Bird's Opening", WhiteOther;
    KingsIndianAttack => "kings_indian_attack", "King's Indian Attack", WhiteOther;
    LarsenOpening => "larsen_opening", "Larsen's Opening", WhiteOther;
    PolishOpening => "polish_opening", "Polish Opening", WhiteOther;
    GrobOpening => "grob_opening", "Grob Opening", WhiteOther;
    OtherWhite => "other_white", "Other (White)", WhiteOther;

    // Black against 1.e4
    SicilianNajdorf => "sicilian_najdorf", "Sicilian Najdorf", BlackVsE4;
    SicilianDragon => "sicilian_dragon", "Sicilian Dragon", BlackVsE4;
    SicilianClassical => "sicilian_classical", "Sicilian Classical", BlackVsE4;
    SicilianScheveningen => "sicilian_scheveningen", "Sicilian Scheveningen", BlackVsE4;
    SicilianSveshnikov => "sicilian_sveshnikov", "Sicilian Sveshnikov", BlackVsE4;
    SicilianAcceleratedDragon => "sicilian_accelerated_dragon", "Sicilian Accelerated Dragon", BlackVsE4;
    SicilianTaimanov => "sicilian_taimanov", "Sicilian Taimanov", BlackVsE4;
    SicilianKan => "sicilian_kan", "Sicilian Kan", BlackVsE4;
    SicilianOther => "sicilian_other", "Sicilian Defense (other)", BlackVsE4;
    FrenchDefense => "french_defense", "French Defense", BlackVsE4;
    FrenchWinawer => "french_winawer", "French Winawer", BlackVsE4;
    FrenchClassical => "french_classical", "French Classical", BlackVsE4;
    CaroKann => "caro_kann", "Caro-Kann Defense", BlackVsE4;
    Scandinavian => "scandinavian", "Scandinavian Defense", BlackVsE4;
    PircDefense => "pirc_defense", "Pirc Defense", BlackVsE4;
    ModernDefense => "modern_defense", "Modern Defense", BlackVsE4;
    AlekhineDefense => "alekhine_defense", "Alekhine's Defense", BlackVsE4;
    PetrovDefense => "petrov_defense", "Petrov's Defense", BlackVsE4;
    PhilidorDefense => "philidor_defense", "Philidor Defense", BlackVsE4;
    TwoKnightsDefense => "two_knights_defense", "Two Knights Defense", BlackVsE4;
    BerlinDefense => "berlin_defense", "Berlin Defense", BlackVsE4;
    LatvianGambit => "latvian_gambit", "Latvian Gambit", BlackVsE4;
    OwenDefense => "owen_defense", "Owen's Defense", BlackVsE4;
    NimzowitschDefense => "nimzowitsch_defense", "Nimzowitsch Defense", BlackVsE4;
    E4DefenseOther => "e4_defense_other", "Other defense to 1.e4", BlackVsE4;

    // Black against 1.d4
    QueensGambitDeclined => "queens_gambit_declined", "Queen's Gambit Declined", BlackVsD4;
    QueensGambitAccepted => "queens_gambit_accepted", "Queen's Gambit Accepted", BlackVsD4;
    SlavDefense => "slav_defense", "Slav Defense", BlackVsD4;
    SemiSlav => "semi_slav", "Semi-Slav Defense", BlackVsD4;
    AlbinCountergambit => "albin_countergambit", "Albin Countergambit", BlackVsD4;
    KingsIndianDefense => "kings_indian_defense", "King's Indian Defense", BlackVsD4;
    GrunfeldDefense => "grunfeld_defense", "Grunfeld Defense", BlackVsD4;
    NimzoIndian => "nimzo_indian", "Nimzo-Indian Defense", BlackVsD4;
    QueensIndian => "queens_indian", "Queen's Indian Defense", BlackVsD4;
    BogoIndian => "bogo_indian", "Bogo-Indian Defense", BlackVsD4;
    BenoniDefense => "benoni_defense", "Benoni Defense", BlackVsD4;
    BudapestGambit => "budapest_gambit", "Budapest Gambit", BlackVsD4;
    DutchDefense => "dutch_defense", "Dutch Defense", BlackVsD4;
    D4DefenseOther => "d4_defense_other", "Other defense to 1.d4", BlackVsD4;

    // Black against everything else
    SymmetricalEnglish => "symmetrical_english", "Symmetrical English", BlackVsOther;
    ReversedSicilian => "reversed_sicilian", "Reversed Sicilian", BlackVsOther;
    AngloIndian => "anglo_indian", "Anglo-Indian Defense", BlackVsOther;
    OtherBlack => "other_black", "Other (Black)", BlackVsOther;
}

impl fmt::Display for OpeningBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown opening bucket: {0}")]
pub struct UnknownBucket(pub String);

impl FromStr for OpeningBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpeningBucket::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}
