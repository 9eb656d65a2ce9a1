// Copyright @yucwang 2021

pub mod primitive;
pub mod shader;
pub mod solid;
