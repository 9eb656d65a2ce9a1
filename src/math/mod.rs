// Copyright 2020 @TwoCookingMice

pub mod aabb;
pub mod constants;
pub mod ray;
pub mod spectrum;
pub mod transform;
