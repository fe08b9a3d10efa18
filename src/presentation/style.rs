use const_format::concatcp;

pub const TITLE: &str = "Instagram Marketing Intelligence";
pub const HEADLINE: &str = concatcp!("📊 ", TITLE, " Platform");
pub const TAGLINE: &str = "AI-powered dashboard to predict <b>virality &amp; engagement</b>";
pub const CAPTION: &str = "Demo analytics dashboard — portfolio project";

pub const BACKGROUND: &str = "#0e1117";
pub const SURFACE: &str = "#161b22";
pub const MUTED: &str = "#9ca3af";
pub const ACCENT: &str = "#ff7a18";

pub const CSS: &str = concatcp!(
    "body{margin:0;display:flex;min-height:100vh;color:#e5e7eb;font-family:system-ui,sans-serif;",
    "background:linear-gradient(135deg,", BACKGROUND, " 0%,#111827 40%,#0b1220 100%);}",
    "aside{width:300px;padding:24px;background:", SURFACE, ";}",
    "aside label{display:block;margin-top:12px;font-size:13px;color:", MUTED, ";}",
    "aside input,aside select{width:100%;margin-top:4px;padding:6px;background:", BACKGROUND,
    ";color:white;border:1px solid #30363d;border-radius:6px;}",
    "aside button{margin-top:20px;width:100%;padding:10px;border:0;border-radius:8px;",
    "background:", ACCENT, ";color:white;font-weight:600;cursor:pointer;}",
    "main{flex:1;padding:24px 40px;}",
    ".cards{display:grid;grid-template-columns:repeat(3,1fr);gap:16px;}",
    ".kpi-card{background:", SURFACE, ";padding:20px;border-radius:14px;box-shadow:0 8px 24px rgba(0,0,0,0.4);}",
    ".kpi-label{font-size:14px;color:", MUTED, ";}",
    ".kpi-value{font-size:34px;font-weight:700;color:white;}",
    ".section-title{font-size:22px;font-weight:600;margin-top:25px;margin-bottom:10px;}",
    ".info{background:#1e3a5f;padding:14px;border-radius:8px;}",
    ".caption{margin-top:16px;font-size:12px;color:", MUTED, ";}",
);
