mod clothing_category;
mod entity;
mod feedback;
mod validation;
