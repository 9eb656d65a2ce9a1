// Copyright @yucwang 2023

pub mod flat;
pub mod normal;
