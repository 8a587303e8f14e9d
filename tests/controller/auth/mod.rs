mod flow;
mod logout;
mod register;
