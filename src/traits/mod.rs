pub mod sdg_classifier;
