//! Built-in opening lines.
//!
//! Each line is a ply-by-ply pattern in SAN without check markers. `*`
//! matches any move, which lets a White system (London, Colle) match whatever
//! Black replied. Order matters only for equal-length ties: earlier wins.

use shakmaty::Color;

use super::OpeningBucket;
use super::OpeningBucket::*;

pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningLine {
    pub bucket: OpeningBucket,
    /// Side whose theory this line describes.
    pub color: Color,
    pub moves: &'static [&'static str],
}

impl OpeningLine {
    pub const fn new(color: Color, bucket: OpeningBucket, moves: &'static [&'static str]) -> Self {
        Self { bucket, color, moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

const fn white(bucket: OpeningBucket, moves: &'static [&'static str]) -> OpeningLine {
    OpeningLine::new(Color::White, bucket, moves)
}

const fn black(bucket: OpeningBucket, moves: &'static [&'static str]) -> OpeningLine {
    OpeningLine::new(Color::Black, bucket, moves)
}

pub static BUILTIN_LINES: &[OpeningLine] = &[
    // ======================================================================
    // White: 1.e4
    // ======================================================================
    white(ItalianGame, &["e4", "e5", "Nf3", "Nc6", "Bc4"]),
    white(EvansGambit, &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "b4"]),
    white(FriedLiverAttack, &["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Ng5"]),
    white(RuyLopez, &["e4", "e5", "Nf3", "Nc6", "Bb5"]),
    white(ScotchGame, &["e4", "e5", "Nf3", "Nc6", "d4"]),
    white(FourKnights, &["e4", "e5", "Nf3", "Nc6", "Nc3", "Nf6"]),
    white(PonzianiOpening, &["e4", "e5", "Nf3", "Nc6", "c3"]),
    white(KingsGambit, &["e4", "e5", "f4"]),
    white(ViennaGame, &["e4", "e5", "Nc3"]),
    white(BishopsOpening, &["e4", "e5", "Bc4"]),
    white(CenterGame, &["e4", "e5", "d4", "exd4", "Qxd4"]),
    white(DanishGambit, &["e4", "e5", "d4", "exd4", "c3"]),
    white(SmithMorraGambit, &["e4", "c5", "d4", "cxd4", "c3"]),
    white(AlapinSicilian, &["e4", "c5", "c3"]),
    white(ClosedSicilian, &["e4", "c5", "Nc3"]),
    white(GrandPrixAttack, &["e4", "c5", "Nc3", "*", "f4"]),
    white(GrandPrixAttack, &["e4", "c5", "f4"]),
    white(OpenSicilian, &["e4", "c5", "Nf3", "*", "d4"]),
    white(FrenchAdvance, &["e4", "e6", "d4", "d5", "e5"]),
    white(CaroKannAdvance, &["e4", "c6", "d4", "d5", "e5"]),
    // ======================================================================
    // White: 1.d4
    // ======================================================================
    white(QueensGambit, &["d4", "d5", "c4"]),
    white(LondonSystem, &["d4", "*", "Bf4"]),
    white(LondonSystem, &["d4", "*", "Nf3", "*", "Bf4"]),
    white(JobavaLondon, &["d4", "*", "Nc3", "*", "Bf4"]),
    white(ColleSystem, &["d4", "d5", "Nf3", "*", "e3"]),
    white(CatalanOpening, &["d4", "Nf6", "c4", "e6", "g3"]),
    white(TrompowskyAttack, &["d4", "Nf6", "Bg5"]),
    white(TorreAttack, &["d4", "Nf6", "Nf3", "e6", "Bg5"]),
    white(VeresovAttack, &["d4", "d5", "Nc3", "Nf6", "Bg5"]),
    white(BlackmarDiemerGambit, &["d4", "d5", "e4"]),
    // ======================================================================
    // White: flank openings
    // ======================================================================
    white(EnglishOpening, &["c4"]),
    white(RetiOpening, &["Nf3"]),
    white(KingsIndianAttack, &["Nf3", "*", "g3", "*", "Bg2", "*", "O-O", "*", "d3"]),
    white(BirdsOpening, &["f4"]),
    white(LarsenOpening, &["b3"]),
    white(PolishOpening, &["b4"]),
    white(GrobOpening, &["g4"]),
    // ======================================================================
    // Black: against 1.e4
    // ======================================================================
    black(SicilianOther, &["e4", "c5"]),
    black(SicilianNajdorf, &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6"]),
    black(SicilianDragon, &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "g6"]),
    black(SicilianClassical, &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "Nc6"]),
    black(SicilianScheveningen, &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "e6"]),
    black(SicilianSveshnikov, &["e4", "c5", "Nf3", "Nc6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "e5"]),
    black(SicilianAcceleratedDragon, &["e4", "c5", "Nf3", "Nc6", "d4", "cxd4", "Nxd4", "g6"]),
    black(SicilianTaimanov, &["e4", "c5", "Nf3", "e6", "d4", "cxd4", "Nxd4", "Nc6"]),
    black(SicilianKan, &["e4", "c5", "Nf3", "e6", "d4", "cxd4", "Nxd4", "a6"]),
    black(FrenchDefense, &["e4", "e6"]),
    black(FrenchWinawer, &["e4", "e6", "d4", "d5", "Nc3", "Bb4"]),
    black(FrenchClassical, &["e4", "e6", "d4", "d5", "Nc3", "Nf6"]),
    black(CaroKann, &["e4", "c6"]),
    black(Scandinavian, &["e4", "d5"]),
    black(PircDefense, &["e4", "d6"]),
    black(ModernDefense, &["e4", "g6"]),
    black(AlekhineDefense, &["e4", "Nf6"]),
    black(OwenDefense, &["e4", "b6"]),
    black(NimzowitschDefense, &["e4", "Nc6"]),
    black(PetrovDefense, &["e4", "e5", "Nf3", "Nf6"]),
    black(PhilidorDefense, &["e4", "e5", "Nf3", "d6"]),
    black(LatvianGambit, &["e4", "e5", "Nf3", "f5"]),
    black(TwoKnightsDefense, &["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6"]),
    black(BerlinDefense, &["e4", "e5", "Nf3", "Nc6", "Bb5", "Nf6"]),
    // ======================================================================
    // Black: against 1.d4
    // ======================================================================
    black(QueensGambitDeclined, &["d4", "d5", "c4", "e6"]),
    black(QueensGambitAccepted, &["d4", "d5", "c4", "dxc4"]),
    black(SlavDefense, &["d4", "d5", "c4", "c6"]),
    black(SemiSlav, &["d4", "d5", "c4", "c6", "Nc3", "Nf6", "Nf3", "e6"]),
    black(SemiSlav, &["d4", "d5", "c4", "c6", "Nf3", "Nf6", "Nc3", "e6"]),
    black(AlbinCountergambit, &["d4", "d5", "c4", "e5"]),
    black(KingsIndianDefense, &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7"]),
    black(GrunfeldDefense, &["d4", "Nf6", "c4", "g6", "Nc3", "d5"]),
    black(NimzoIndian, &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4"]),
    black(QueensIndian, &["d4", "Nf6", "c4", "e6", "Nf3", "b6"]),
    black(BogoIndian, &["d4", "Nf6", "c4", "e6", "Nf3", "Bb4"]),
    black(BenoniDefense, &["d4", "Nf6", "c4", "c5"]),
    black(BudapestGambit, &["d4", "Nf6", "c4", "e5"]),
    black(DutchDefense, &["d4", "f5"]),
    // ======================================================================
    // Black: against flank openings
    // ======================================================================
    black(SymmetricalEnglish, &["c4", "c5"]),
    black(ReversedSicilian, &["c4", "e5"]),
    black(AngloIndian, &["c4", "Nf6"]),
];
