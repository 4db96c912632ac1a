pub mod walk_sampler;
