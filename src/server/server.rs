use super::*;
use crate::Error;
use crate::dataset::Dataset;
use crate::features::Form;
use crate::features::Slider;
use crate::prediction::Dashboard;
use crate::presentation::Page;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    /// Build the services once, then serve them to every worker.
    pub async fn run(args: Args) -> anyhow::Result<()> {
        let dataset = Dataset::load(&args.data)?;
        let models = args.provider().provide(&dataset)?;
        let models = match args.unknown {
            Some(policy) => models.with_policy(policy),
            None => models,
        };
        let state = web::Data::new(Dashboard::new(&dataset, models));
        let bind = args.bind();
        log::info!("starting dashboard server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes)
        })
        .bind(bind)?
        .run()
        .await?;
        Ok(())
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/analyze", web::post().to(analyze))
        .route("/api/analyze", web::post().to(analyze_json))
        .route("/api/trend", web::get().to(trend))
        .route("/api/options", web::get().to(options));
}

async fn index(dashboard: web::Data<Dashboard>) -> impl Responder {
    let form = Form::default();
    html(Page {
        options: dashboard.options(),
        trend: dashboard.trend(),
        form: &form,
        analysis: None,
    })
}

async fn analyze(dashboard: web::Data<Dashboard>, form: web::Form<Form>) -> impl Responder {
    match dashboard.analyze(&form) {
        Ok((_, analysis)) => html(Page {
            options: dashboard.options(),
            trend: dashboard.trend(),
            form: &form,
            analysis: Some(&analysis),
        }),
        Err(e) => failure(e),
    }
}

async fn analyze_json(dashboard: web::Data<Dashboard>, form: web::Json<Form>) -> impl Responder {
    match dashboard.analyze(&form) {
        Ok((_, analysis)) => HttpResponse::Ok().json(serde_json::json!({
            "virality": analysis.virality,
            "engagement": analysis.engagement,
            "tier": analysis.tier,
            "message": analysis.tier.message(),
            "followers": analysis.followers,
        })),
        Err(e) => failure(e),
    }
}

async fn trend(dashboard: web::Data<Dashboard>) -> impl Responder {
    HttpResponse::Ok().json(dashboard.trend().points())
}

async fn options(dashboard: web::Data<Dashboard>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "categories": dashboard.options(),
        "sliders": Slider::all(),
    }))
}

fn html(page: Page<'_>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.html())
}

fn failure(e: Error) -> HttpResponse {
    log::warn!("analysis failed: {}", e);
    match e {
        Error::Input(_) => HttpResponse::BadRequest().body(e.to_string()),
        Error::Schema(_) => HttpResponse::UnprocessableEntity().body(e.to_string()),
        _ => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
