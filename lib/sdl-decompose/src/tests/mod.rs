mod comments;
mod testkit;
