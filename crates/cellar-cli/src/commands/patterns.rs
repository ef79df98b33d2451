use anyhow::Result;
use cellar_text::{PatternName, get_label, resub, resub_with};

/// (pattern, sample, replacement override)
const SAMPLES: &[(PatternName, &str, Option<&str>)] = &[
    (
        PatternName::Quantity,
        "quantities:  3 x 750ml and 4  x  750ml and 1.5L and 2X375ml",
        None,
    ),
    (
        PatternName::Format,
        "formats:  3 x 750ml and 4  x  750ml and 1.5lt and 2X375ml",
        None,
    ),
    (
        PatternName::Score,
        "scores: wa100 ws95+ iwc93-95 wa92-94",
        Some("recommended"),
    ),
    (
        PatternName::Points,
        "points: 85pts and 90-95pts",
        Some("holy toledo"),
    ),
    (
        PatternName::Price,
        "prices: ($123.45) and ($321) and - $123.45 or - $321 perhaps $10-15+ and maybe this $123.45-678.90+",
        Some("${2} dollars"),
    ),
    (
        PatternName::Url,
        "urls:  https://foo.com/lasjflasdjflasjdf  or  http://www.pets.com/",
        None,
    ),
    (
        PatternName::Symbol,
        "symbols: (it's) {really} \"good\" - isn't it? $5, 10% & more_",
        None,
    ),
    (
        PatternName::RunOn,
        "run_on: (!!) or (@@@) or (#) or ($$) or (%%%%%%%%%%%) or (^^) or (&) or (******) or (xxxxxxx)",
        None,
    ),
    (
        PatternName::Ampersand,
        "ampersand:  (buy j&j stock) or (buy j & j stock) or (&) or ( & ) or ( 1& ) or ( &x ) or (&&) or ( && )",
        None,
    ),
    (
        PatternName::Dash,
        "dash:  (92-94) or (92 - 94) or (a-b) or (9 -x)",
        None,
    ),
    (
        PatternName::Ellipsis,
        "ellipsis: (...) or (......) or (..) or (. . . .)",
        Some(" so "),
    ),
    (
        PatternName::Endash,
        "endash: of random mixed 6packs pulled from the list of wines below - i do not know the exact make up of each",
        Some(". "),
    ),
    (
        PatternName::Exclaim,
        "exclaim:  (wtf!)  or  (i really love this!) or (!!!)",
        None,
    ),
    (
        PatternName::Percent,
        "percent:  (give you a 100% discount!) or (55 %) or (44%%) or (%)",
        None,
    ),
    (
        PatternName::Pound,
        "pound:  (#10)  or  (x#x) or (# 5) or (##123) or (### 123)",
        None,
    ),
    (
        PatternName::Slash,
        "slash:  (buy j/j stock) or (buy j / j stock) or (/) or ( / ) or ( 1/ ) or ( /x ) or (//) or ( // )",
        None,
    ),
];

const LABEL_SAMPLES: &[&str] = &[
    "2009 Charvin Chateauneuf-du-Pape - $58.81 (IWC93-95)(WA92-94)",
    "With the new 2017 vintage, Zorzal may finally have it right with their Eggo \"Filoso\" Pinot Noir and the $",
    "NV Charvin Chateauneuf-du-Pape - $58.81",
    "Mystery #55 Crappy Chardonnay - $58.81",
    "Charvin Chateauneuf-du-Pape",
];

pub fn handle() -> Result<()> {
    for (name, sample, replacement) in SAMPLES {
        let out = match replacement {
            Some(replacement) => resub_with(*name, sample, replacement),
            None => resub(*name, sample),
        };
        println!("{name}\n  {sample}\n  {out}\n");
    }

    println!("{}", PatternName::Label);
    for sample in LABEL_SAMPLES {
        println!("  {sample}\n  {}\n", get_label(&sample.to_lowercase()));
    }

    Ok(())
}
