criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        loading_dataset,
        encoding_feature_row,
        fitting_viral_classifier,
        fitting_engagement_regressor,
        predicting_both_models,
}

use viralcast::dataset::Dataset;
use viralcast::encoding::HandleUnknown;
use viralcast::encoding::Preprocessor;
use viralcast::forest::Config;
use viralcast::models::EngagementRegressor;
use viralcast::models::Provider;
use viralcast::models::Trainer;
use viralcast::models::ViralClassifier;

fn dataset() -> Dataset {
    Dataset::load(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(viralcast::DATASET_PATH))
        .expect("bundled dataset")
}

fn loading_dataset(c: &mut criterion::Criterion) {
    c.bench_function("load the bundled dataset", |b| b.iter(|| dataset()));
}

fn encoding_feature_row(c: &mut criterion::Criterion) {
    let dataset = dataset();
    let posts = dataset.posts();
    let preprocessor = Preprocessor::fit(&posts, HandleUnknown::Ignore);
    c.bench_function("one-hot encode a feature row", |b| {
        b.iter(|| preprocessor.transform(&posts[0]))
    });
}

fn fitting_viral_classifier(c: &mut criterion::Criterion) {
    let dataset = dataset();
    c.bench_function("fit a 150-tree viral classifier", |b| {
        b.iter(|| ViralClassifier::fit_with(&dataset, Config::classifier(), HandleUnknown::Ignore))
    });
}

fn fitting_engagement_regressor(c: &mut criterion::Criterion) {
    let dataset = dataset();
    c.bench_function("fit a 150-tree engagement regressor", |b| {
        b.iter(|| EngagementRegressor::fit_with(&dataset, Config::regressor(), HandleUnknown::Ignore))
    });
}

fn predicting_both_models(c: &mut criterion::Criterion) {
    let dataset = dataset();
    let posts = dataset.posts();
    let models = Trainer::default().provide(&dataset).expect("fit models");
    c.bench_function("predict virality and engagement for one post", |b| {
        b.iter(|| {
            (
                models.classifier.predict_proba(&posts[0]),
                models.regressor.predict(&posts[0]),
            )
        })
    });
}
