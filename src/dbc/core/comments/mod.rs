pub(crate) mod cm_;
pub(crate) mod cm_bo_;
pub(crate) mod cm_bu_;
pub(crate) mod cm_sg_;
