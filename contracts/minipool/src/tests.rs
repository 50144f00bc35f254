mod deposit;
mod lifecycle;
mod withdraw;
